/// Vocabulary counted by the technical-term factor
pub const TECHNICAL_TERMS: [&str; 5] = ["implement", "design", "optimize", "algorithm", "system"];

pub struct TextMetrics;

impl TextMetrics {
    pub fn word_count(text: &str) -> usize {
        text.split_whitespace().count()
    }

    /// Words (lower-cased, punctuation kept) that belong to [`TECHNICAL_TERMS`].
    /// Every occurrence counts.
    pub fn technical_term_count(text: &str) -> usize {
        text.split_whitespace()
            .filter(|word| TECHNICAL_TERMS.contains(&word.to_lowercase().as_str()))
            .count()
    }

    /// Lines that start a `- ` bullet after a newline
    pub fn bullet_count(text: &str) -> usize {
        text.matches("\n- ").count()
    }

    pub fn paragraph_count(text: &str) -> usize {
        text.matches("\n\n").count() + 1
    }

    pub fn is_trimmed(text: &str) -> bool {
        text.trim() == text
    }
}

/// Flesch reading ease. Higher is easier; typical prose lands between 0 and 100
/// but the formula is unbounded in both directions.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<String> = text.split_whitespace().filter_map(normalize_word).collect();
    if words.is_empty() {
        return 0.0;
    }

    let word_count = words.len() as f64;
    let sentences = sentence_count(text) as f64;
    let syllables: usize = words.iter().map(|w| syllable_count(w)).sum();

    206.835 - 1.015 * (word_count / sentences) - 84.6 * (syllables as f64 / word_count)
}

/// Runs of text terminated by `.`, `!` or `?`; trailing unterminated text counts as one.
pub fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .count()
        .max(1)
}

/// Vowel-group estimate with a silent trailing `e`. Never less than one.
pub fn syllable_count(word: &str) -> usize {
    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    if chars.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut count = 0;
    let mut previous_vowel = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    let len = chars.len();
    if count > 1 && chars[len - 1] == 'e' && !(len >= 2 && chars[len - 2] == 'l') {
        count -= 1;
    }

    count.max(1)
}

fn normalize_word(raw: &str) -> Option<String> {
    let word: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '\'')
        .collect();
    (!word.is_empty()).then_some(word)
}

use crate::engines::metrics::{flesch_reading_ease, TextMetrics, TECHNICAL_TERMS};
use crate::types::Problem;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Every factor behind a problem's score.
///
/// All fields except `mutation_quality` (and therefore `total`) lie in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub length: f64,
    pub technical: f64,
    pub nested: f64,
    pub complexity: f64,
    pub readability: f64,
    pub structure: f64,
    pub formatting: f64,
    pub clarity: f64,
    pub diversity: f64,
    pub mutation_quality: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    pub fn to_metrics(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("length".to_string(), self.length),
            ("technical".to_string(), self.technical),
            ("nested".to_string(), self.nested),
            ("complexity".to_string(), self.complexity),
            ("readability".to_string(), self.readability),
            ("structure".to_string(), self.structure),
            ("formatting".to_string(), self.formatting),
            ("clarity".to_string(), self.clarity),
            ("diversity".to_string(), self.diversity),
            ("mutation_quality".to_string(), self.mutation_quality),
        ])
    }
}

/// Heuristic quality score from local text statistics. Stateless: the same
/// record always receives the same score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProblemScorer;

impl ProblemScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, problem: &Problem) -> f64 {
        self.breakdown(problem).total
    }

    pub fn breakdown(&self, problem: &Problem) -> ScoreBreakdown {
        let content = problem.content.as_str();

        let length = (TextMetrics::word_count(content) as f64 / 100.0).min(1.0);
        let technical =
            (TextMetrics::technical_term_count(content) as f64 / TECHNICAL_TERMS.len() as f64).min(1.0);
        let nested = (TextMetrics::bullet_count(content) as f64 / 10.0).min(1.0);
        let complexity = (length + technical + nested) / 3.0;

        let readability = (flesch_reading_ease(content) / 100.0).clamp(0.0, 1.0);
        let structure = (TextMetrics::paragraph_count(content) as f64 / 5.0).min(1.0);
        let formatting = if TextMetrics::is_trimmed(content) { 1.0 } else { 0.8 };
        let clarity = (readability + structure + formatting) / 3.0;

        // Variety of strategies in this record's own lineage
        let distinct: HashSet<_> = problem.mutation_history.iter().collect();
        let diversity = (distinct.len() as f64 / 3.0).min(1.0);

        // Deliberately uncapped: long lineages can push the total above 1
        let mutation_quality = problem.mutation_history.len() as f64 / 10.0;

        let total = (complexity + clarity + diversity + mutation_quality) / 4.0;

        ScoreBreakdown {
            length,
            technical,
            nested,
            complexity,
            readability,
            structure,
            formatting,
            clarity,
            diversity,
            mutation_quality,
            total,
        }
    }
}

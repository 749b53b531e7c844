use crate::error::{ProcessorError, Result};
use crate::types::Problem;
use std::collections::HashMap;

pub struct CorpusValidator;

impl CorpusValidator {
    /// Check for minimum required records
    pub fn validate_minimum_records(problems: &[Problem], min_records: usize) -> Result<()> {
        if problems.len() < min_records {
            return Err(ProcessorError::Validation(format!(
                "Insufficient problems: {} found, minimum {} required",
                problems.len(),
                min_records
            )));
        }
        Ok(())
    }

    /// Statements that occur more than once, with their counts
    pub fn find_duplicates(problems: &[Problem]) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for problem in problems {
            *counts.entry(problem.content.as_str()).or_insert(0) += 1;
        }

        let mut duplicates: Vec<(String, usize)> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(content, count)| (content.to_string(), count))
            .collect();
        duplicates.sort();
        duplicates
    }
}

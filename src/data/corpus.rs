use crate::error::{ProcessorError, Result};
use crate::types::Problem;
use super::validator::CorpusValidator;
use std::path::Path;

pub struct CorpusLoader;

impl CorpusLoader {
    /// Load one root problem per non-empty line
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Problem>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ProcessorError::InputNotFound(format!(
                "{} not found",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    /// Load and validate the corpus. An empty corpus is treated like a missing one.
    pub fn load_and_validate<P: AsRef<Path>>(path: P) -> Result<Vec<Problem>> {
        let path = path.as_ref();
        let problems = Self::load(path)?;

        CorpusValidator::validate_minimum_records(&problems, 1).map_err(|_| {
            ProcessorError::InputNotFound(format!("{} contains no problems", path.display()))
        })?;

        let duplicates = CorpusValidator::find_duplicates(&problems);
        if !duplicates.is_empty() {
            log::warn!("Duplicate problems in corpus: {:?}", duplicates);
        }

        Ok(problems)
    }

    pub fn parse(contents: &str) -> Vec<Problem> {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Problem::new)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_lines() {
        let problems = CorpusLoader::parse("Problem 1\n\n   \nProblem 2\n");

        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].content, "Problem 1");
        assert_eq!(problems[1].content, "Problem 2");
        assert!(problems.iter().all(|p| p.is_root()));
    }

    #[test]
    fn test_load_missing_file() {
        let result = CorpusLoader::load("no/such/problems.txt");
        assert!(matches!(result, Err(ProcessorError::InputNotFound(_))));
    }

    #[test]
    fn test_empty_corpus_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problems.txt");
        std::fs::write(&path, "\n  \n").unwrap();

        let result = CorpusLoader::load_and_validate(&path);
        assert!(matches!(result, Err(ProcessorError::InputNotFound(_))));
    }

    #[test]
    fn test_load_trims_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problems.txt");
        std::fs::write(&path, "  Reverse a linked list.  \nDesign a cache.\n").unwrap();

        let problems = CorpusLoader::load_and_validate(&path).unwrap();
        assert_eq!(problems[0].content, "Reverse a linked list.");
        assert_eq!(problems[1].content, "Design a cache.");
    }
}

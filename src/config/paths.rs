use super::traits::ConfigSection;
use crate::error::ProcessorError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Filesystem locations used by a run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub problems_file: PathBuf,
    pub output_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub leaderboard_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            problems_file: PathBuf::from("problems/problems.txt"),
            output_dir: PathBuf::from("output"),
            templates_dir: PathBuf::from("output/prompts/mutations"),
            leaderboard_file: PathBuf::from("leaderboard.yaml"),
        }
    }
}

impl ConfigSection for PathsConfig {
    fn section_name() -> &'static str {
        "paths"
    }

    fn validate(&self) -> Result<(), ProcessorError> {
        if self.leaderboard_file.as_os_str().is_empty() {
            return Err(ProcessorError::Configuration(
                "Leaderboard path must not be empty".to_string()
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ProcessorError::Configuration(
                "Output directory must not be empty".to_string()
            ));
        }
        Ok(())
    }
}

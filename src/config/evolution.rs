use super::traits::ConfigSection;
use crate::error::ProcessorError;
use serde::{Deserialize, Serialize};

/// Round loop parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub seed: u64,
    pub num_rounds: usize,
    /// Candidates sampled for mutation each round
    pub num_problems: usize,
    /// Population size retained at each round boundary
    pub topk_problems: usize,
    pub mutate_on_start: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            num_rounds: 5,
            num_problems: 10,
            topk_problems: 5,
            mutate_on_start: false,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), ProcessorError> {
        if self.num_problems < 1 {
            return Err(ProcessorError::Validation(
                "num_problems must be positive".to_string()
            ));
        }
        if self.topk_problems < 1 {
            return Err(ProcessorError::Validation(
                "topk_problems must be positive".to_string()
            ));
        }
        if self.topk_problems > self.num_problems {
            return Err(ProcessorError::Validation(
                "topk_problems cannot exceed num_problems".to_string()
            ));
        }
        Ok(())
    }
}

use crate::error::GenerationError;
use async_trait::async_trait;

/// External text-generation capability
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `user_input` under the instructions in `system_prompt`
    async fn generate(&self, system_prompt: &str, user_input: &str) -> Result<String, GenerationError>;

    /// Release any held connection. Called once at the end of a run.
    async fn close(&self) -> Result<(), GenerationError> {
        Ok(())
    }
}

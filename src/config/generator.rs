use super::traits::ConfigSection;
use crate::error::ProcessorError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CHAT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Text-generation backend settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Model identifier sent to the backend
    pub agent: String,
    pub api_key: String,
    pub endpoint: String,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    /// Request timeout. Unset leaves the HTTP client default in place.
    pub timeout_secs: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            agent: "gpt-4".to_string(),
            api_key: String::new(),
            endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            temperature: None,
            max_tokens: None,
            timeout_secs: None,
        }
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("agent", &self.agent)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("endpoint", &self.endpoint)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ConfigSection for GeneratorConfig {
    fn section_name() -> &'static str {
        "generator"
    }

    fn validate(&self) -> Result<(), ProcessorError> {
        if self.api_key.trim().is_empty() {
            return Err(ProcessorError::Configuration(
                "An API key is required to reach the text-generation backend".to_string()
            ));
        }
        if self.agent.trim().is_empty() {
            return Err(ProcessorError::Configuration(
                "Agent (model identifier) must not be empty".to_string()
            ));
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ProcessorError::Configuration(
                    "Temperature must be between 0 and 2".to_string()
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_rejected() {
        let config = GeneratorConfig::default();
        assert!(matches!(config.validate(), Err(ProcessorError::Configuration(_))));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = GeneratorConfig {
            api_key: "sk-secret".to_string(),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}

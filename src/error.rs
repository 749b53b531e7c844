use crate::types::MutationStrategy;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Input not found: {0}")]
    InputNotFound(String),

    #[error("Template not found for strategy '{0}'")]
    TemplateNotFound(MutationStrategy),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Mutation failed: {0}")]
    MutationFailed(#[from] GenerationError),

    #[error("Cleanup error: {0}")]
    Cleanup(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Failures of the external text-generation capability.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("response contained no usable text")]
    EmptyResponse,

    #[error("generator is closed")]
    Closed,
}

pub type Result<T> = std::result::Result<T, ProcessorError>;

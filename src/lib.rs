//! Evolve a corpus of technical problem statements through LLM-driven
//! rewriting and heuristic scoring, keeping the best variants each round.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod types;

pub use error::{GenerationError, ProcessorError, Result};
pub use types::{MutationStrategy, Problem};

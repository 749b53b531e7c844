pub mod operators;
pub mod progress;
pub mod round_orchestrator;
pub mod runner;

pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, ProgressCallback, ProgressMessage};
pub use round_orchestrator::{CandidateFailure, OrchestratorConfig, RoundOrchestrator, RoundOutcome};
pub use runner::{EvolutionRunner, RunSettings};

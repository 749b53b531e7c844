pub mod evaluation;
pub mod evolution;
pub mod metrics;
pub mod mutation;

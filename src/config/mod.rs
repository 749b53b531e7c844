pub mod traits;
pub mod evolution;
pub mod generator;
pub mod paths;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use generator::GeneratorConfig;
pub use paths::PathsConfig;
pub use traits::ConfigSection;

use super::{
    evolution::EvolutionConfig,
    generator::GeneratorConfig,
    paths::PathsConfig,
    traits::ConfigSection,
};
use crate::error::ProcessorError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `PROBLEMS_EVOLUTION__SEED=7`
pub const ENV_PREFIX: &str = "PROBLEMS";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub generator: GeneratorConfig,
    pub paths: PathsConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ProcessorError> {
        validate_section(&self.evolution)?;
        validate_section(&self.generator)?;
        validate_section(&self.paths)?;
        Ok(())
    }
}

/// Prefix a section's validation message with its name, e.g. `[evolution] ...`
fn validate_section<S: ConfigSection>(section: &S) -> Result<(), ProcessorError> {
    section.validate().map_err(|e| match e {
        ProcessorError::Validation(msg) => {
            ProcessorError::Validation(format!("[{}] {}", S::section_name(), msg))
        }
        ProcessorError::Configuration(msg) => {
            ProcessorError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Layer defaults, an optional config file and environment overrides.
    ///
    /// Validation is deferred to [`ConfigManager::update`] so that CLI flags
    /// can still supply required values such as the API key.
    pub fn load_layered(&self, path: Option<&Path>) -> Result<(), ProcessorError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(ProcessorError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ProcessorError::Configuration(format!("Failed to load config: {}", e)))?;

        let config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| ProcessorError::Configuration(format!("Failed to parse config: {}", e)))?;

        *self.write() = config;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ProcessorError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ProcessorError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| ProcessorError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.write() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ProcessorError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| ProcessorError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| ProcessorError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Apply `f` and validate the result. The previous config is kept on failure.
    pub fn update<F>(&self, f: F) -> Result<(), ProcessorError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.write();
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, AppConfig> {
        self.config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("processor.toml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_update_validates() {
        let manager = ConfigManager::new();

        let result = manager.update(|c| c.generator.api_key = "sk-test".to_string());
        assert!(result.is_ok());
        assert_eq!(manager.get().generator.api_key, "sk-test");

        let result = manager.update(|c| c.evolution.topk_problems = 0);
        assert!(result.is_err());
        assert_eq!(manager.get().evolution.topk_problems, 5);
    }

    #[test]
    fn test_validation_names_section() {
        let mut config = AppConfig::default();
        config.generator.api_key = "sk-test".to_string();
        config.evolution.topk_problems = 0;

        match config.validate() {
            Err(ProcessorError::Validation(msg)) => assert!(msg.starts_with("[evolution] ")),
            other => panic!("expected validation error, got {:?}", other),
        }

        config.evolution.topk_problems = 5;
        config.generator.api_key.clear();
        match config.validate() {
            Err(ProcessorError::Configuration(msg)) => assert!(msg.starts_with("[generator] ")),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_layered_reads_env() {
        // Same seed as the file-based test, which may run concurrently
        std::env::set_var("PROBLEMS_EVOLUTION__SEED", "7");
        std::env::set_var("PROBLEMS_GENERATOR__API_KEY", "sk-from-env");

        let manager = ConfigManager::new();
        let result = manager.load_layered(None);

        std::env::remove_var("PROBLEMS_EVOLUTION__SEED");
        std::env::remove_var("PROBLEMS_GENERATOR__API_KEY");

        result.unwrap();
        let config = manager.get();
        assert_eq!(config.evolution.seed, 7);
        assert_eq!(config.generator.api_key, "sk-from-env");
        assert_eq!(config.evolution.num_rounds, 5);
    }

    #[test]
    fn test_load_layered_reads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "[evolution]\nseed = 7\nnum_rounds = 2\n\n[generator]\nagent = \"gpt-4o-mini\"\n",
        );

        let manager = ConfigManager::new();
        manager.load_layered(Some(path.as_path())).unwrap();

        let config = manager.get();
        assert_eq!(config.evolution.seed, 7);
        assert_eq!(config.evolution.num_rounds, 2);
        assert_eq!(config.evolution.num_problems, 10);
        assert_eq!(config.generator.agent, "gpt-4o-mini");
    }

    #[test]
    fn test_load_layered_missing_file_is_configuration_error() {
        let manager = ConfigManager::new();
        let result = manager.load_layered(Some(Path::new("does/not/exist.toml")));
        assert!(matches!(result, Err(ProcessorError::Configuration(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");

        let manager = ConfigManager::new();
        manager
            .update(|c| {
                c.generator.api_key = "sk-test".to_string();
                c.evolution.seed = 99;
            })
            .unwrap();
        manager.save_to_file(&path).unwrap();

        let reloaded = ConfigManager::new();
        reloaded.load_from_file(&path).unwrap();
        assert_eq!(reloaded.get().evolution.seed, 99);
    }
}

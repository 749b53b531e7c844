use super::progress::ProgressCallback;
use super::round_orchestrator::{OrchestratorConfig, RoundOrchestrator};
use crate::config::AppConfig;
use crate::data::{CorpusLoader, Leaderboard, ProblemStore, TemplateStore};
use crate::engines::mutation::{MutationDispatcher, TextGenerator};
use crate::error::{ProcessorError, Result};
use crate::types::Problem;
use std::path::PathBuf;
use std::sync::Arc;

pub struct RunSettings {
    pub num_rounds: usize,
    pub mutate_on_start: bool,
    pub problems_file: PathBuf,
    pub leaderboard_file: PathBuf,
}

impl From<&AppConfig> for RunSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            num_rounds: config.evolution.num_rounds,
            mutate_on_start: config.evolution.mutate_on_start,
            problems_file: config.paths.problems_file.clone(),
            leaderboard_file: config.paths.leaderboard_file.clone(),
        }
    }
}

/// Drives a whole run: corpus load, rounds, leaderboard writes, teardown
pub struct EvolutionRunner {
    settings: RunSettings,
    orchestrator: RoundOrchestrator,
}

impl EvolutionRunner {
    pub fn new(settings: RunSettings, orchestrator: RoundOrchestrator) -> Self {
        Self { settings, orchestrator }
    }

    /// Wire the default components for `config` around `generator`
    pub fn from_config(config: &AppConfig, generator: Arc<dyn TextGenerator>) -> Result<Self> {
        let templates = match TemplateStore::load_dir(&config.paths.templates_dir) {
            Ok(store) => store,
            Err(ProcessorError::InputNotFound(reason)) => {
                log::warn!("{}; using built-in mutation templates", reason);
                TemplateStore::builtin()
            }
            Err(e) => return Err(e),
        };

        let dispatcher = MutationDispatcher::new(templates, generator);
        let orchestrator = RoundOrchestrator::new(OrchestratorConfig::from(&config.evolution), dispatcher)
            .with_store(ProblemStore::new(&config.paths.output_dir));

        Ok(Self::new(RunSettings::from(config), orchestrator))
    }

    /// Wire the runner and load the corpus. The generator is closed if either step fails.
    pub async fn start(config: &AppConfig, generator: Arc<dyn TextGenerator>) -> Result<(Self, Vec<Problem>)> {
        let runner = match Self::from_config(config, Arc::clone(&generator)) {
            Ok(runner) => runner,
            Err(e) => {
                close_generator(generator.as_ref()).await;
                return Err(e);
            }
        };

        match runner.load_corpus() {
            Ok(problems) => Ok((runner, problems)),
            Err(e) => {
                runner.cleanup().await;
                Err(e)
            }
        }
    }

    /// Load the corpus as root records and persist them
    pub fn load_corpus(&self) -> Result<Vec<Problem>> {
        let problems = CorpusLoader::load_and_validate(&self.settings.problems_file)?;
        log::info!(
            "Loaded {} problems from {}",
            problems.len(),
            self.settings.problems_file.display()
        );

        if let Some(store) = self.orchestrator.store() {
            store.save_all(&problems)?;
        }
        Ok(problems)
    }

    /// Run all rounds on `problems`, then release the generator.
    /// Returns the final population, best first.
    pub async fn run<C: ProgressCallback>(&mut self, problems: Vec<Problem>, callback: &mut C) -> Result<Vec<Problem>> {
        let result = self.run_rounds(problems, callback).await;
        self.cleanup().await;
        result
    }

    async fn run_rounds<C: ProgressCallback>(&mut self, mut problems: Vec<Problem>, callback: &mut C) -> Result<Vec<Problem>> {
        let total_rounds = self.settings.num_rounds;

        if self.settings.mutate_on_start {
            callback.on_round_start(0, total_rounds);
            problems = self.orchestrator.process_round(0, problems, callback).await.population;
        }

        for round in 1..=total_rounds {
            callback.on_round_start(round, total_rounds);
            problems = self.orchestrator.process_round(round, problems, callback).await.population;

            Leaderboard::from_population(round, &problems, self.orchestrator.scorer())
                .save(&self.settings.leaderboard_file)?;
        }

        Ok(problems)
    }

    /// Best-effort teardown; failures are only logged
    pub async fn cleanup(&self) {
        close_generator(self.orchestrator.dispatcher().generator().as_ref()).await;
    }

    pub fn orchestrator(&self) -> &RoundOrchestrator {
        &self.orchestrator
    }
}

async fn close_generator(generator: &dyn TextGenerator) {
    if let Err(e) = generator.close().await {
        let error = ProcessorError::Cleanup(e.to_string());
        log::error!("{}", error);
    }
}

use super::operators::{choose_strategy, retain_top_k, sample_indices};
use super::progress::ProgressCallback;
use crate::config::EvolutionConfig as RunEvolutionConfig;
use crate::data::ProblemStore;
use crate::engines::evaluation::ProblemScorer;
use crate::engines::mutation::MutationDispatcher;
use crate::error::ProcessorError;
use crate::types::{MutationStrategy, Problem};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

pub struct OrchestratorConfig {
    /// Candidates sampled for mutation per round
    pub num_problems: usize,
    /// Population retained after each round
    pub top_k: usize,
    pub seed: Option<u64>,
}

impl From<&RunEvolutionConfig> for OrchestratorConfig {
    fn from(config: &RunEvolutionConfig) -> Self {
        Self {
            num_problems: config.num_problems,
            top_k: config.topk_problems,
            seed: Some(config.seed),
        }
    }
}

/// A candidate that was skipped this round
#[derive(Debug)]
pub struct CandidateFailure {
    pub problem_id: Uuid,
    pub strategy: MutationStrategy,
    pub error: ProcessorError,
}

enum CandidateOutcome {
    Created(Problem),
    Failed(CandidateFailure),
}

#[derive(Debug)]
pub struct RoundOutcome {
    /// Next population, best first, at most `top_k` records
    pub population: Vec<Problem>,
    /// Records created by successful mutations this round, scored
    pub created: Vec<Problem>,
    pub failures: Vec<CandidateFailure>,
}

impl RoundOutcome {
    pub fn best_score(&self) -> Option<f64> {
        self.population.first().map(|p| p.score)
    }
}

pub struct RoundOrchestrator {
    config: OrchestratorConfig,
    dispatcher: MutationDispatcher,
    scorer: ProblemScorer,
    store: Option<ProblemStore>,
    rng: StdRng,
}

impl RoundOrchestrator {
    pub fn new(config: OrchestratorConfig, dispatcher: MutationDispatcher) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            dispatcher,
            scorer: ProblemScorer::new(),
            store: None,
            rng,
        }
    }

    /// Persist every record created by a mutation
    pub fn with_store(mut self, store: ProblemStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Run one sample → mutate → score → rank → truncate cycle
    pub async fn process_round<C: ProgressCallback>(
        &mut self,
        round: usize,
        mut population: Vec<Problem>,
        callback: &mut C,
    ) -> RoundOutcome {
        log::info!("Starting round {} with {} problems", round, population.len());

        let selected = sample_indices(population.len(), self.config.num_problems, &mut self.rng);
        let total = selected.len();

        let mut outcomes = Vec::with_capacity(total);
        for (i, &idx) in selected.iter().enumerate() {
            let strategy = choose_strategy(&mut self.rng);
            let outcome = self.mutate_candidate(&population[idx], strategy).await;
            outcomes.push(outcome);
            callback.on_candidate_processed(i + 1, total);
        }

        let mut created = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                CandidateOutcome::Created(problem) => created.push(problem),
                CandidateOutcome::Failed(failure) => failures.push(failure),
            }
        }

        log::info!(
            "Round {} completed. Generated {} new variants, {} failed",
            round,
            created.len(),
            failures.len()
        );

        // Corpus roots enter the ranking unscored
        for problem in population.iter_mut().filter(|p| p.score == 0.0) {
            problem.score = self.scorer.evaluate(problem);
        }

        let mut merged = created.clone();
        merged.extend(population);
        let population = retain_top_k(merged, self.config.top_k);

        let outcome = RoundOutcome {
            population,
            created,
            failures,
        };
        callback.on_round_complete(round, outcome.best_score().unwrap_or(0.0), outcome.population.len());
        outcome
    }

    async fn mutate_candidate(&self, problem: &Problem, strategy: MutationStrategy) -> CandidateOutcome {
        match self.dispatcher.mutate(problem, strategy).await {
            Ok(mut child) => {
                child.score = self.scorer.evaluate(&child);
                if let Some(store) = &self.store {
                    if let Err(e) = store.save(&child) {
                        log::warn!("Failed to persist problem {}: {}", child.id, e);
                    }
                }
                CandidateOutcome::Created(child)
            }
            Err(error) => {
                log::error!("Error processing problem {} ({}): {}", problem.id, strategy, error);
                CandidateOutcome::Failed(CandidateFailure {
                    problem_id: problem.id,
                    strategy,
                    error,
                })
            }
        }
    }

    pub fn dispatcher(&self) -> &MutationDispatcher {
        &self.dispatcher
    }

    pub fn scorer(&self) -> &ProblemScorer {
        &self.scorer
    }

    pub fn store(&self) -> Option<&ProblemStore> {
        self.store.as_ref()
    }
}

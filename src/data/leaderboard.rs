use crate::engines::evaluation::ProblemScorer;
use crate::error::Result;
use crate::types::{MutationStrategy, Problem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub score: f64,
    pub mutations: Vec<MutationStrategy>,
    pub quality_metrics: BTreeMap<String, f64>,
}

/// Snapshot of the population after a round, best first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    pub timestamp: DateTime<Utc>,
    pub round_number: usize,
    pub problems: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn from_population(round_number: usize, population: &[Problem], scorer: &ProblemScorer) -> Self {
        let mut problems: Vec<LeaderboardEntry> = population
            .iter()
            .map(|problem| LeaderboardEntry {
                id: problem.id,
                parent_id: problem.parent_id,
                score: problem.score,
                mutations: problem.mutation_history.clone(),
                quality_metrics: scorer.breakdown(problem).to_metrics(),
            })
            .collect();
        problems.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        Self {
            timestamp: Utc::now(),
            round_number,
            problems,
        }
    }

    /// Overwrite `path` with this leaderboard as YAML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        log::info!("Leaderboard for round {} written to {}", self.round_number, path.display());
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Named rewrite behavior driving which prompt template is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationStrategy {
    Rephrase,
    Expand,
    Simplify,
    AddConstraints,
}

impl MutationStrategy {
    pub const ALL: [MutationStrategy; 4] = [
        MutationStrategy::Rephrase,
        MutationStrategy::Expand,
        MutationStrategy::Simplify,
        MutationStrategy::AddConstraints,
    ];

    /// Pool the round orchestrator draws from. `AddConstraints` is never picked automatically.
    pub const AUTO_SELECTABLE: [MutationStrategy; 3] = [
        MutationStrategy::Rephrase,
        MutationStrategy::Expand,
        MutationStrategy::Simplify,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MutationStrategy::Rephrase => "rephrase",
            MutationStrategy::Expand => "expand",
            MutationStrategy::Simplify => "simplify",
            MutationStrategy::AddConstraints => "add_constraints",
        }
    }
}

impl fmt::Display for MutationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MutationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MutationStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| format!("unknown mutation strategy: {}", s))
    }
}

/// One candidate problem statement and its lineage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: Uuid,
    pub content: String,
    pub score: f64,
    pub parent_id: Option<Uuid>,
    pub mutation_history: Vec<MutationStrategy>,
    pub created_at: DateTime<Utc>,
}

impl Problem {
    /// Root record, as loaded from the corpus
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            score: 0.0,
            parent_id: None,
            mutation_history: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Child record produced by applying `strategy` to `self`.
    /// The parent is left untouched.
    pub fn derive(&self, content: impl Into<String>, strategy: MutationStrategy) -> Self {
        let mut mutation_history = self.mutation_history.clone();
        mutation_history.push(strategy);

        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            score: 0.0,
            parent_id: Some(self.id),
            mutation_history,
            created_at: Utc::now(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn generation(&self) -> usize {
        self.mutation_history.len()
    }
}

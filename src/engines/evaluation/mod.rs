pub mod scorer;

pub use scorer::{ProblemScorer, ScoreBreakdown};

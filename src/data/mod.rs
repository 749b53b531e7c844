pub mod corpus;
pub mod leaderboard;
pub mod store;
pub mod templates;
pub mod validator;

pub use corpus::CorpusLoader;
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use store::ProblemStore;
pub use templates::{PromptTemplate, TemplateExample, TemplateStore};
pub use validator::CorpusValidator;

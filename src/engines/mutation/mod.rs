pub mod dispatcher;
pub mod generator;
pub mod openai;

pub use dispatcher::MutationDispatcher;
pub use generator::TextGenerator;
pub use openai::OpenAiGenerator;

pub mod readability;
pub mod text;

pub use readability::flesch_reading_ease;
pub use text::{TextMetrics, TECHNICAL_TERMS};

//! Document summarization: hierarchical generative summaries with a
//! deterministic extractive fallback.

pub mod fallback;
pub mod prompt;
pub mod summarizer;

pub use fallback::fallback_summary;
pub use summarizer::Summarizer;

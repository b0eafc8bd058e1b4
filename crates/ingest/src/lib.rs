//! Text chunking for the summarization pipeline.
//!
//! Long documents are split into overlapping character-bounded chunks so
//! each piece fits a generative backend's context window while keeping
//! local context across boundaries.

pub mod chunk;
pub mod chunker;

pub use chunk::Chunk;
pub use chunker::{Chunker, ChunkerConfig};

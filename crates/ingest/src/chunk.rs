use serde::{Deserialize, Serialize};

/// A contiguous slice of the source text. Chunks carry no identity
/// beyond their position in the sequence; they live for one
/// summarization call and are discarded after the reduction step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
}

impl Chunk {
    pub fn new(index: usize, text: String) -> Self {
        Self { index, text }
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

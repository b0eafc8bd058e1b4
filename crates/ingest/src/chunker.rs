use serde::{Deserialize, Serialize};

use crate::chunk::Chunk;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Maximum chunk length in characters.
    pub max_chunk_size: usize,
    /// Characters of source text shared by consecutive chunks.
    pub overlap: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: 8000,
            overlap: 400,
        }
    }
}

pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    pub fn new(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Split `text` into ordered chunks of at most `max_chunk_size`
    /// characters, consecutive chunks sharing `overlap` characters of
    /// source text. Splits prefer a paragraph break, then a sentence
    /// break, then a word break, before cutting mid-word.
    ///
    /// Text no longer than one chunk comes back as a single chunk;
    /// empty input yields no chunks.
    pub fn split(&self, text: &str) -> Vec<Chunk> {
        if text.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = text.chars().collect();
        let max = self.config.max_chunk_size.max(1);

        if chars.len() <= max {
            return vec![Chunk::new(0, text.to_string())];
        }

        let mut chunks = Vec::new();
        let mut start = 0;

        while chars.len() - start > max {
            let limit = start + max;
            let end = find_split_point(&chars, start, limit);

            chunks.push(Chunk::new(chunks.len(), collect(&chars, start, end)));

            // Step back to share an overlap region with the next chunk,
            // clamped so every iteration makes progress.
            start = end.saturating_sub(self.config.overlap).max(start + 1);
        }

        chunks.push(Chunk::new(chunks.len(), collect(&chars, start, chars.len())));
        chunks
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(ChunkerConfig::default())
    }
}

fn collect(chars: &[char], start: usize, end: usize) -> String {
    chars[start..end].iter().collect()
}

/// Best split point in `(start, limit]`, preferring natural boundaries.
/// A boundary only counts when it falls in the second half of the
/// window; a break right at the front would produce a sliver chunk.
fn find_split_point(chars: &[char], start: usize, limit: usize) -> usize {
    let floor = start + (limit - start) / 2;

    for separator in [&['\n', '\n'][..], &['.', ' '][..], &[' '][..]] {
        if let Some(end) = rfind_separator(chars, floor, limit, separator) {
            return end;
        }
    }

    limit
}

/// Scan backwards from `limit` for `separator`, returning the position
/// just past it, or None when no occurrence ends after `floor`.
fn rfind_separator(chars: &[char], floor: usize, limit: usize, separator: &[char]) -> Option<usize> {
    let len = separator.len();
    let mut end = limit;

    while end >= floor + len {
        if chars[end - len..end] == *separator {
            return Some(end);
        }
        end -= 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunker(max: usize, overlap: usize) -> Chunker {
        Chunker::new(ChunkerConfig {
            max_chunk_size: max,
            overlap,
        })
    }

    /// Rebuild the source by dropping each chunk's leading overlap.
    fn reconstruct(chunks: &[Chunk], overlap: usize) -> String {
        let mut out = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i == 0 {
                out.push_str(&chunk.text);
            } else {
                out.extend(chunk.text.chars().skip(overlap));
            }
        }
        out
    }

    #[test]
    fn short_text_is_one_chunk() {
        let chunks = Chunker::default().split("A short document.");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].index, 0);
        assert_eq!(chunks[0].text, "A short document.");
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(Chunker::default().split("").is_empty());
    }

    #[test]
    fn default_sizes_produce_three_chunks_for_20k_chars() {
        let text = "a".repeat(20_000);
        let chunks = Chunker::default().split(&text);

        assert_eq!(chunks.len(), 3);
        for chunk in &chunks {
            assert!(chunk.char_len() <= 8000);
        }

        // Literal 400-character overlaps between consecutive chunks.
        for pair in chunks.windows(2) {
            let tail: String = pair[0].text.chars().rev().take(400).collect();
            let tail: String = tail.chars().rev().collect();
            let head: String = pair[1].text.chars().take(400).collect();
            assert_eq!(tail, head);
        }

        assert_eq!(reconstruct(&chunks, 400), text);
    }

    #[test]
    fn prefers_paragraph_boundaries() {
        let mut text = "x".repeat(80);
        text.push_str("\n\n");
        text.push_str(&"y".repeat(80));
        let chunks = chunker(100, 10).split(&text);

        assert!(chunks.len() >= 2);
        assert!(chunks[0].text.ends_with("\n\n"));
    }

    #[test]
    fn prefers_sentence_over_word_boundaries() {
        let mut text = String::new();
        for _ in 0..20 {
            text.push_str("one two three four five six seven. ");
        }
        let chunks = chunker(100, 10).split(&text);

        assert!(chunks.len() > 1);
        assert!(chunks[0].text.ends_with(". "));
    }

    #[test]
    fn hard_cut_when_no_boundaries_exist() {
        let text = "z".repeat(250);
        let chunks = chunker(100, 20).split(&text);

        for chunk in &chunks {
            assert!(chunk.char_len() <= 100);
        }
        assert_eq!(reconstruct(&chunks, 20), text);
    }

    #[test]
    fn reconstruction_with_natural_boundaries() {
        let mut text = String::new();
        for i in 0..60 {
            text.push_str(&format!("Sentence number {i} with several words in it. "));
        }
        let overlap = 30;
        let chunks = chunker(200, overlap).split(&text);

        assert!(chunks.len() > 1);
        assert_eq!(reconstruct(&chunks, overlap), text);
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        let text = "é".repeat(300);
        let chunks = chunker(100, 10).split(&text);

        for chunk in &chunks {
            assert!(chunk.char_len() <= 100);
        }
        assert_eq!(reconstruct(&chunks, 10), text);
    }

    #[test]
    fn indices_are_sequential() {
        let text = "w".repeat(500);
        let chunks = chunker(100, 10).split(&text);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
        }
    }
}

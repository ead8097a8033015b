//! Sliding-window character chunking.
//!
//! Character-level windows (rather than sentence or token splits) are
//! robust to the short structured markdown these docs contain: tables,
//! bullet lists and inline code all mis-segment under sentence splitters.
//! The overlap guards against severing a fact that straddles a window
//! boundary.
//!
//! "Character" means Unicode scalar value, matching `str::chars`; windows
//! are cut on char boundaries so multi-byte text never splits mid-glyph.

use crate::types::{Chunk, Document};
use askdocs_core::{AppError, AppResult};

/// Window size in characters.
pub const CHUNK_SIZE: usize = 400;

/// Overlap between consecutive windows in characters.
pub const CHUNK_OVERLAP: usize = 80;

/// Validated chunking parameters.
///
/// The overlap must be strictly smaller than the window: with `O >= W`
/// the window start would never advance and the loop would emit
/// duplicates forever. That degenerate configuration is rejected at
/// construction, never at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    window: usize,
    overlap: usize,
}

impl ChunkConfig {
    /// Create a chunk configuration, rejecting `overlap >= window`.
    pub fn new(window: usize, overlap: usize) -> AppResult<Self> {
        if window == 0 || overlap >= window {
            return Err(AppError::ChunkConfig { window, overlap });
        }
        Ok(Self { window, overlap })
    }

    /// Window size in characters.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Overlap in characters.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// How far the window start advances each step. Positive by
    /// construction.
    pub fn step(&self) -> usize {
        self.window - self.overlap
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        // CHUNK_OVERLAP < CHUNK_SIZE, so construction cannot fail
        Self {
            window: CHUNK_SIZE,
            overlap: CHUNK_OVERLAP,
        }
    }
}

/// Split documents into overlapping character windows.
///
/// For each document independently, a window of `config.window()` chars
/// slides across the content from offset 0, advancing by `config.step()`
/// until the window start reaches the content length. Each window is
/// trimmed; empty windows are skipped. `sequence_index` is a single
/// counter incremented per emitted chunk, continuing across documents.
///
/// A document shorter than the window yields exactly one chunk; a
/// document that trims to nothing yields zero chunks.
pub fn chunk_documents(documents: &[Document], config: ChunkConfig) -> Vec<Chunk> {
    let mut chunks = Vec::new();

    for doc in documents {
        let chars: Vec<char> = doc.content.chars().collect();
        let mut start = 0;

        while start < chars.len() {
            let end = (start + config.window()).min(chars.len());
            let window: String = chars[start..end].iter().collect();
            let text = window.trim();

            if !text.is_empty() {
                chunks.push(Chunk {
                    source_id: doc.source_id.clone(),
                    text: text.to_string(),
                    sequence_index: chunks.len(),
                });
            }

            start += config.step();
        }
    }

    tracing::info!("Created {} chunks from {} documents", chunks.len(), documents.len());
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(source_id: &str, content: &str) -> Document {
        Document {
            source_id: source_id.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_overlap_must_be_less_than_window() {
        assert!(ChunkConfig::new(400, 80).is_ok());
        assert!(ChunkConfig::new(400, 400).is_err());
        assert!(ChunkConfig::new(400, 500).is_err());
        assert!(ChunkConfig::new(0, 0).is_err());
    }

    #[test]
    fn test_zero_overlap_is_valid() {
        let config = ChunkConfig::new(10, 0).unwrap();
        assert_eq!(config.step(), 10);
    }

    #[test]
    fn test_short_document_yields_one_chunk() {
        let config = ChunkConfig::default();
        let docs = vec![doc(
            "rate_limits.md",
            "Standard users get 100 requests per minute. Enterprise users get 500 requests per minute.",
        )];

        let chunks = chunk_documents(&docs, config);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].source_id, "rate_limits.md");
        assert_eq!(chunks[0].sequence_index, 0);
    }

    #[test]
    fn test_window_positions_across_two_documents() {
        // a.md: 600 chars -> windows 0..400 and 320..600; b.md: 50 chars -> one window
        let config = ChunkConfig::new(400, 80).unwrap();
        let docs = vec![doc("a.md", &"a".repeat(600)), doc("b.md", &"b".repeat(50))];

        let chunks = chunk_documents(&docs, config);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text.chars().count(), 400);
        assert_eq!(chunks[1].text.chars().count(), 280); // 320..600
        assert_eq!(chunks[2].text.chars().count(), 50);

        let indices: Vec<usize> = chunks.iter().map(|c| c.sequence_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(chunks[2].source_id, "b.md");
    }

    #[test]
    fn test_sequence_index_not_reset_between_documents() {
        let config = ChunkConfig::new(10, 2).unwrap();
        let docs = vec![doc("a.md", &"x".repeat(25)), doc("b.md", &"y".repeat(25))];

        let chunks = chunk_documents(&docs, config);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.sequence_index, i);
        }
        assert!(chunks.iter().any(|c| c.source_id == "b.md"));
    }

    #[test]
    fn test_whitespace_only_document_yields_no_chunks() {
        let config = ChunkConfig::default();
        let docs = vec![doc("empty.md", "   \n\n\t  ")];

        let chunks = chunk_documents(&docs, config);
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_no_character_loss() {
        // Every non-whitespace character of the content must survive in
        // at least one window.
        let config = ChunkConfig::new(40, 10).unwrap();
        let content: String = (0..200)
            .map(|i| char::from_u32('a' as u32 + (i % 26)).unwrap())
            .collect();
        let docs = vec![doc("a.md", &content)];

        let chunks = chunk_documents(&docs, config);

        // Reconstruct by overlaying windows at their step offsets
        let mut covered = vec![false; content.chars().count()];
        let mut start = 0;
        let mut chunk_iter = chunks.iter();
        while start < covered.len() {
            let end = (start + config.window()).min(covered.len());
            // Window text is trimmed, but for this alphabetic content
            // trimming removes nothing.
            let chunk = chunk_iter.next().unwrap();
            assert_eq!(chunk.text.chars().count(), end - start);
            for c in covered.iter_mut().take(end).skip(start) {
                *c = true;
            }
            start += config.step();
        }
        assert!(covered.into_iter().all(|c| c));
    }

    #[test]
    fn test_multibyte_content_does_not_panic() {
        let config = ChunkConfig::new(4, 1).unwrap();
        let docs = vec![doc("unicode.md", "héllo wörld 名前 ログ")];

        let chunks = chunk_documents(&docs, config);
        assert!(!chunks.is_empty());
        for chunk in &chunks {
            assert!(chunk.text.chars().count() <= 4);
        }
    }
}

//! Engine type definitions.

use serde::{Deserialize, Serialize};

/// A raw documentation file loaded from the corpus directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier: the file's base name (e.g. "rate_limits.md").
    /// This is the citation label that appears in the final answer.
    pub source_id: String,

    /// Full raw text of the file
    pub content: String,
}

/// A contiguous window of a source document, the retrieval unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Source document id, inherited from the parent `Document`
    pub source_id: String,

    /// Window text, trimmed of leading/trailing whitespace, never empty
    pub text: String,

    /// Global emission counter across the whole corpus. Strictly
    /// increasing; used for tie-break ordering and debugging only.
    pub sequence_index: usize,
}

/// A retrieved chunk with its cosine similarity to the query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub chunk: Chunk,

    /// Cosine similarity in [-1, 1] (inner product of unit vectors)
    pub score: f32,
}

/// The structured result of answering one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Raw model output. May end with the model's own inline citation
    /// line; front ends strip that before display, since `sources` is
    /// the authoritative citation list.
    pub answer: String,

    /// De-duplicated source ids in first-seen retrieval order. Empty when
    /// the answer was judged out-of-scope, regardless of what was
    /// retrieved.
    pub sources: Vec<String>,

    /// The full scored retrieval list, kept even when `sources` is
    /// suppressed so callers can inspect what was retrieved.
    pub retrieved_chunks: Vec<RetrievalResult>,
}

impl AnswerResult {
    /// Fixed non-committal result returned when retrieval produced
    /// nothing (empty index). The generative model is not invoked.
    pub fn no_context() -> Self {
        Self {
            answer: askdocs_prompt::NO_CONTEXT_ANSWER.to_string(),
            sources: Vec::new(),
            retrieved_chunks: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_context_result_is_empty() {
        let result = AnswerResult::no_context();
        assert!(result.sources.is_empty());
        assert!(result.retrieved_chunks.is_empty());
        assert!(result.answer.contains("could not find"));
    }

    #[test]
    fn test_answer_result_serialization() {
        let result = AnswerResult {
            answer: "100 RPM [rate_limits.md]".to_string(),
            sources: vec!["rate_limits.md".to_string()],
            retrieved_chunks: vec![RetrievalResult {
                chunk: Chunk {
                    source_id: "rate_limits.md".to_string(),
                    text: "100 requests per minute".to_string(),
                    sequence_index: 0,
                },
                score: 0.91,
            }],
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: AnswerResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sources, result.sources);
        assert_eq!(back.retrieved_chunks.len(), 1);
    }
}

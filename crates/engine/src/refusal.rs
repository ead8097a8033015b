//! Refusal-phrase detection for citation suppression.
//!
//! The flat index always returns *some* top-k chunks, even for questions
//! the corpus cannot answer: exact search has no relevance floor. So the
//! decision to show citations hinges on whether the model actually used
//! the context, detected by scanning its answer for the refusal wording
//! the system prompt mandates.
//!
//! This is a best-effort heuristic, not a guarantee: the model is not
//! contractually bound to emit the exact refusal string, so detection can
//! miss (sources shown for an ungrounded answer) or over-trigger (sources
//! suppressed for a partially grounded one). The phrase set is injectable
//! so it can be tested and tuned independently.

/// Phrases indicating the model fell back to the refusal sentence.
/// All lowercase; matching is case-insensitive substring.
const DEFAULT_PHRASES: &[&str] = &[
    "i don't have enough information",
    "i do not have enough information",
    "not enough information",
    "cannot be found in the provided documentation",
    "not covered in the provided documentation",
];

/// Detects out-of-scope answers by refusal-phrase matching.
#[derive(Debug, Clone)]
pub struct RefusalDetector {
    phrases: Vec<String>,
}

impl RefusalDetector {
    /// Create a detector with a custom phrase set. Phrases are matched
    /// case-insensitively; they are lowercased here once.
    pub fn new(phrases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            phrases: phrases
                .into_iter()
                .map(|p| p.into().to_lowercase())
                .collect(),
        }
    }

    /// The active phrase set.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// True if the answer contains any refusal phrase.
    pub fn is_refusal(&self, answer: &str) -> bool {
        let lower = answer.to_lowercase();
        self.phrases.iter().any(|phrase| lower.contains(phrase))
    }
}

impl Default for RefusalDetector {
    fn default() -> Self {
        Self::new(DEFAULT_PHRASES.iter().copied())
    }
}

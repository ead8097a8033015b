//! Prompt types and fixed instruction strings.

use serde::{Deserialize, Serialize};

/// The exact refusal sentence the model is instructed to emit when the
/// context does not contain the answer.
///
/// The synthesizer compares the model output against (a prefix of) this
/// literal to detect out-of-scope questions. Best-effort contract: the
/// model is not guaranteed to reproduce it verbatim, which is why the
/// detector matches a set of phrases rather than this string alone.
pub const REFUSAL_SENTENCE: &str =
    "I don't have enough information in the provided documentation to answer this.";

/// Fixed non-committal answer returned without calling the model when
/// retrieval produced nothing (empty index).
pub const NO_CONTEXT_ANSWER: &str =
    "I could not find relevant information in the provided documentation.";

/// Separator between labeled context segments.
pub const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

/// System instruction set given verbatim to the generative model.
///
/// Rule 2 embeds [`REFUSAL_SENTENCE`]; keep the two in sync.
pub const SYSTEM_PROMPT: &str = "\
You are a precise technical documentation assistant. You help engineers \
find answers in the internal documentation excerpts provided to you.

Rules you MUST follow:
1. Answer EXCLUSIVELY using the context excerpts provided. Do NOT use any \
outside knowledge.
2. If the answer is not present in the context, respond with exactly: \
'I don't have enough information in the provided documentation to answer this.'
3. ALWAYS end your answer with a line that reads:
   Sources: [filename.md]
   listing every source file you drew from.
4. Be concise and technically precise.";

/// One labeled excerpt of retrieved context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSegment {
    /// Citation label (source document name, e.g. "rate_limits.md")
    pub source: String,

    /// Chunk text
    pub text: String,
}

impl ContextSegment {
    /// Create a new context segment.
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}

/// A fully rendered prompt, ready for LLM execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundedPrompt {
    /// System instruction set (grounding + citation rules)
    pub system: String,

    /// User message (context block + question)
    pub user: String,
}

//! Prompt construction crate for the Ask Our Docs bot.
//!
//! This crate builds the grounded prompt the answer synthesizer sends to
//! the generative model: a context block assembled from retrieved chunks,
//! a fixed system instruction set enforcing grounding and citation, and a
//! user message rendered through a Handlebars template.
//!
//! The literal strings here are load-bearing: the refusal sentence in the
//! system rules is what the synthesizer later scans for to decide whether
//! to suppress citations, so it must not drift.

pub mod builder;
pub mod types;

pub use builder::{build_context, build_grounded_prompt};
pub use types::{ContextSegment, GroundedPrompt, NO_CONTEXT_ANSWER, REFUSAL_SENTENCE};

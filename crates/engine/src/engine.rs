//! The docs engine: retrieval orchestration and answer synthesis.
//!
//! A `DocsEngine` is constructed once, `build_index` runs once at
//! startup, then `answer` serves each question. After the build the
//! embedder and index are read-only, so an engine behind an `Arc` is
//! safe to share across concurrent query tasks; the embedding and
//! generation calls are still blocking I/O and belong on worker tasks,
//! never on a shared single-threaded loop.

use crate::embeddings::Embedder;
use crate::index::FlatIndex;
use crate::refusal::RefusalDetector;
use crate::types::{AnswerResult, Chunk, RetrievalResult};
use askdocs_core::{AppError, AppResult};
use askdocs_llm::{LlmClient, LlmRequest};
use askdocs_prompt::{build_grounded_prompt, ContextSegment};
use std::collections::HashSet;
use std::sync::Arc;

/// Chunks retrieved per question.
pub const DEFAULT_TOP_K: usize = 3;

/// Near-deterministic decoding for factual accuracy.
const GENERATION_TEMPERATURE: f32 = 0.1;

/// Output length cap for the generation call.
const GENERATION_MAX_TOKENS: u32 = 512;

/// Encapsulates the embedding model, vector index, and LLM client.
///
/// Call `build_index` once at startup, then `answer` for each question.
pub struct DocsEngine {
    embedder: Embedder,
    llm: Arc<dyn LlmClient>,
    model: String,
    refusal: RefusalDetector,
    chunks: Vec<Chunk>,
    index: Option<FlatIndex>,
}

impl DocsEngine {
    /// Create an engine around an embedder and an LLM client.
    ///
    /// The same embedder instance is used for chunk text at build time
    /// and query text at retrieval time.
    pub fn new(embedder: Embedder, llm: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            embedder,
            llm,
            model: model.into(),
            refusal: RefusalDetector::default(),
            chunks: Vec::new(),
            index: None,
        }
    }

    /// Replace the refusal detector (e.g. a tuned phrase set).
    pub fn with_refusal_detector(mut self, detector: RefusalDetector) -> Self {
        self.refusal = detector;
        self
    }

    /// Number of indexed chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Embed all chunks and build the flat index.
    ///
    /// Index position `i` corresponds to `chunks[i]`. Rebuilding replaces
    /// the previous index wholesale; there is no incremental update.
    pub async fn build_index(&mut self, chunks: Vec<Chunk>) -> AppResult<()> {
        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();

        tracing::info!("Generating embeddings for {} chunks", texts.len());
        let embeddings = self.embedder.embed_batch(&texts).await?;

        let index = FlatIndex::build(embeddings)?;
        tracing::info!(
            "Index built: {} vectors (dim={})",
            index.len(),
            index.dimensions()
        );

        self.chunks = chunks;
        self.index = Some(index);
        Ok(())
    }

    /// Retrieve the top-k chunks most similar to a question.
    ///
    /// Never filters by score: even low-relevance chunks are returned,
    /// because relevance gating is delegated to the grounding
    /// instructions and refusal detection in `answer`. The result is
    /// empty only when the index itself is empty.
    pub async fn retrieve(&self, question: &str, k: usize) -> AppResult<Vec<RetrievalResult>> {
        let index = self.index.as_ref().ok_or_else(|| {
            AppError::Other("Index not built. Call build_index before retrieve.".to_string())
        })?;

        if index.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = self.embedder.embed_one(question).await?;
        let matches = index.search(&query_embedding, k)?;

        Ok(matches
            .into_iter()
            .map(|(position, score)| RetrievalResult {
                chunk: self.chunks[position].clone(),
                score,
            })
            .collect())
    }

    /// Answer a question: retrieval, grounded prompt, LLM call, and
    /// citation-safe post-processing.
    pub async fn answer(&self, question: &str) -> AppResult<AnswerResult> {
        let retrieved = self.retrieve(question, DEFAULT_TOP_K).await?;

        // Only locally short-circuited path: nothing indexed, nothing to
        // ground on, so the model is not invoked at all.
        if retrieved.is_empty() {
            tracing::info!("Empty index, returning fixed non-committal answer");
            return Ok(AnswerResult::no_context());
        }

        let segments: Vec<ContextSegment> = retrieved
            .iter()
            .map(|r| ContextSegment::new(&r.chunk.source_id, &r.chunk.text))
            .collect();

        let prompt = build_grounded_prompt(question, &segments)?;

        let request = LlmRequest::new(prompt.user, self.model.clone())
            .with_system(prompt.system)
            .with_temperature(GENERATION_TEMPERATURE)
            .with_max_tokens(GENERATION_MAX_TOKENS);

        // One network call, no retry; transport failures fail the query
        let response = self.llm.complete(&request).await?;
        let answer = response.content;

        // Sources come from the system's own retrieval metadata, never
        // from the model's inline citation line.
        let sources = if self.refusal.is_refusal(&answer) {
            tracing::warn!(
                "Out-of-scope question detected, sources suppressed. Question: {:?}",
                question
            );
            Vec::new()
        } else {
            let sources = dedup_sources(&retrieved);
            tracing::info!("Sources cited: {:?}", sources);
            sources
        };

        Ok(AnswerResult {
            answer,
            sources,
            retrieved_chunks: retrieved,
        })
    }
}

/// De-duplicated source ids in first-seen retrieval order.
fn dedup_sources(retrieved: &[RetrievalResult]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut sources = Vec::new();
    for result in retrieved {
        if seen.insert(result.chunk.source_id.clone()) {
            sources.push(result.chunk.source_id.clone());
        }
    }
    sources
}

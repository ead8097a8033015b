//! End-to-end engine tests over a temp-dir corpus, using the
//! deterministic trigram embedder and a scripted LLM client.

use askdocs_core::{AppError, AppResult};
use askdocs_engine::{
    chunk_documents, create_provider, load_documents, ChunkConfig, DocsEngine, Embedder,
};
use askdocs_llm::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Scripted LLM client: returns a fixed reply (or a fixed failure) and
/// counts invocations.
struct ScriptedLlm {
    reply: String,
    fail: bool,
    calls: AtomicUsize,
}

impl ScriptedLlm {
    fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: String::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LlmClient for ScriptedLlm {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::Generation("provider unavailable".to_string()));
        }
        Ok(LlmResponse {
            content: self.reply.clone(),
            model: request.model.clone(),
            usage: LlmUsage::default(),
        })
    }
}

fn write_doc(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

fn trigram_embedder() -> Embedder {
    Embedder::new(create_provider("trigram", "trigram-v1", None).unwrap())
}

async fn build_engine(docs_dir: &Path, llm: Arc<ScriptedLlm>) -> DocsEngine {
    let documents = load_documents(docs_dir).unwrap();
    let chunks = chunk_documents(&documents, ChunkConfig::default());

    let mut engine = DocsEngine::new(trigram_embedder(), llm, "test-model");
    engine.build_index(chunks).await.unwrap();
    engine
}

#[tokio::test]
async fn single_document_retrieval() {
    let temp = TempDir::new().unwrap();
    write_doc(
        temp.path(),
        "rate_limits.md",
        "Standard users get 100 requests per minute. Enterprise users get 500 requests per minute.",
    );

    let llm = ScriptedLlm::replying("unused");
    let engine = build_engine(temp.path(), llm).await;

    assert_eq!(engine.chunk_count(), 1);

    let results = engine
        .retrieve("What is the enterprise rate limit?", 1)
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].chunk.source_id, "rate_limits.md");
}

#[tokio::test]
async fn retrieve_is_idempotent() {
    let temp = TempDir::new().unwrap();
    write_doc(temp.path(), "authentication.md", "Pass the key in the X-API-KEY header.");
    write_doc(temp.path(), "rate_limits.md", "Standard limit: 100 requests per minute.");

    let engine = build_engine(temp.path(), ScriptedLlm::replying("unused")).await;

    let first = engine.retrieve("How do I authenticate?", 2).await.unwrap();
    let second = engine.retrieve("How do I authenticate?", 2).await.unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.chunk.sequence_index, b.chunk.sequence_index);
        assert!((a.score - b.score).abs() < 1e-6);
    }
}

#[tokio::test]
async fn retrieve_returns_all_when_k_exceeds_corpus() {
    let temp = TempDir::new().unwrap();
    write_doc(temp.path(), "a.md", "Alpha documentation page.");
    write_doc(temp.path(), "b.md", "Beta documentation page.");

    let engine = build_engine(temp.path(), ScriptedLlm::replying("unused")).await;

    let results = engine.retrieve("documentation", 10).await.unwrap();
    assert_eq!(results.len(), 2);
    // Non-increasing score order
    assert!(results[0].score >= results[1].score);
}

#[tokio::test]
async fn grounded_answer_cites_retrieval_sources() {
    let temp = TempDir::new().unwrap();
    // 600 chars of rate-limit text produces two chunks sharing one source
    let body = "Standard users get 100 requests per minute and 1000 requests per hour. \
                Enterprise users get 500 requests per minute. "
        .repeat(5);
    write_doc(temp.path(), "rate_limits.md", &body);

    let llm = ScriptedLlm::replying(
        "Standard users are limited to 100 requests per minute. Sources: [rate_limits.md]",
    );
    let engine = build_engine(temp.path(), Arc::clone(&llm)).await;
    assert!(engine.chunk_count() > 1);

    let result = engine.answer("What is the standard rate limit?").await.unwrap();

    assert_eq!(llm.call_count(), 1);
    // Deduplicated: one source even though multiple chunks share it
    assert_eq!(result.sources, vec!["rate_limits.md"]);
    assert!(!result.retrieved_chunks.is_empty());
    assert!(result.answer.contains("100 requests per minute"));
}

#[tokio::test]
async fn out_of_scope_answer_suppresses_sources() {
    let temp = TempDir::new().unwrap();
    write_doc(temp.path(), "rate_limits.md", "Standard limit: 100 requests per minute.");

    let llm = ScriptedLlm::replying(
        "I don't have enough information in the provided documentation to answer this.",
    );
    let engine = build_engine(temp.path(), llm).await;

    let result = engine.answer("What is the weather today?").await.unwrap();

    // Retrieval still returned top-k chunks; only the citations are gone
    assert!(result.sources.is_empty());
    assert!(!result.retrieved_chunks.is_empty());
}

#[tokio::test]
async fn empty_index_short_circuits_without_model_call() {
    let temp = TempDir::new().unwrap();
    // Eligible file whose trimmed content is empty: zero chunks
    write_doc(temp.path(), "blank.md", "   \n\n  ");

    let llm = ScriptedLlm::replying("should never be used");
    let engine = build_engine(temp.path(), Arc::clone(&llm)).await;
    assert_eq!(engine.chunk_count(), 0);

    let retrieved = engine.retrieve("anything", 3).await.unwrap();
    assert!(retrieved.is_empty());

    let result = engine.answer("anything").await.unwrap();
    assert_eq!(llm.call_count(), 0);
    assert!(result.sources.is_empty());
    assert!(result.retrieved_chunks.is_empty());
    assert!(result.answer.contains("could not find"));
}

#[tokio::test]
async fn generation_failure_propagates() {
    let temp = TempDir::new().unwrap();
    write_doc(temp.path(), "rate_limits.md", "Standard limit: 100 requests per minute.");

    let llm = ScriptedLlm::failing();
    let engine = build_engine(temp.path(), llm).await;

    let err = engine.answer("What is the standard rate limit?").await.unwrap_err();
    assert!(matches!(err, AppError::Generation(_)));
}

#[tokio::test]
async fn question_about_one_document_cites_only_that_document() {
    let temp = TempDir::new().unwrap();
    write_doc(
        temp.path(),
        "authentication.md",
        "To authenticate an API request, generate an API key and pass it in the X-API-KEY header.",
    );
    write_doc(
        temp.path(),
        "endpoints.md",
        "GET /users/{id} retrieves a specific user's profile. POST /projects creates a project.",
    );
    write_doc(
        temp.path(),
        "rate_limits.md",
        "Standard users get 100 requests per minute. Enterprise users get 500 requests per minute.",
    );

    let engine = build_engine(temp.path(), ScriptedLlm::replying("unused")).await;

    let results = engine
        .retrieve("How do I authenticate my API request with an API key?", 1)
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].chunk.source_id, "authentication.md");
}

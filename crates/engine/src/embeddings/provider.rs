//! Embedding provider trait and factory.

use askdocs_core::{AppError, AppResult};
use std::sync::Arc;

/// Trait for embedding providers.
///
/// The engine holds exactly one provider instance for its whole lifetime
/// and routes both chunk text (build time) and query text (retrieval
/// time) through it: mismatched models silently degrade similarity
/// scores.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync + std::fmt::Debug {
    /// Get provider name (e.g., "ollama", "trigram")
    fn provider_name(&self) -> &str;

    /// Get model identifier
    fn model_name(&self) -> &str;

    /// Get embedding dimensions (a model property, not configurable)
    fn dimensions(&self) -> usize;

    /// Generate embeddings for multiple texts in a batch.
    ///
    /// Returns one vector per input text, in input order. Failures
    /// propagate without retry.
    async fn embed_batch(&self, texts: &[String]) -> AppResult<Vec<Vec<f32>>>;

    /// Generate an embedding for a single text (convenience method).
    async fn embed(&self, text: &str) -> AppResult<Vec<f32>> {
        let mut results = self.embed_batch(&[text.to_string()]).await?;
        results
            .pop()
            .ok_or_else(|| AppError::Embedding("No embedding returned".to_string()))
    }
}

/// Create an embedding provider by name.
///
/// # Arguments
/// * `provider` - "ollama" or "trigram"
/// * `model` - model identifier (ignored by trigram)
/// * `endpoint` - optional endpoint URL (ollama only)
pub fn create_provider(
    provider: &str,
    model: &str,
    endpoint: Option<&str>,
) -> AppResult<Arc<dyn EmbeddingProvider>> {
    match provider.to_lowercase().as_str() {
        "ollama" => {
            let provider = super::providers::ollama::OllamaProvider::new(endpoint, model);
            Ok(Arc::new(provider))
        }

        "trigram" => {
            let provider = super::providers::trigram::TrigramProvider::default();
            Ok(Arc::new(provider))
        }

        _ => Err(AppError::Embedding(format!(
            "Unknown embedding provider: '{}'. Supported providers: ollama, trigram",
            provider
        ))),
    }
}

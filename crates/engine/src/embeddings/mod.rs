//! Embedding layer for the docs engine.
//!
//! Wraps a single shared [`EmbeddingProvider`] and re-normalizes every
//! vector to unit L2 length so that inner product equals cosine
//! similarity downstream; no separate normalization is needed at query
//! time.

pub mod provider;
pub mod providers;

pub use provider::{create_provider, EmbeddingProvider};

use askdocs_core::AppResult;
use std::sync::Arc;

/// Embedder: one provider instance per engine lifetime.
///
/// Both chunk text at build time and query text at retrieval time go
/// through this same instance, guaranteeing a consistent model.
#[derive(Debug, Clone)]
pub struct Embedder {
    provider: Arc<dyn EmbeddingProvider>,
}

impl Embedder {
    /// Create an embedder around a provider.
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { provider }
    }

    /// Embedding dimensionality of the underlying model.
    pub fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    /// Model identifier of the underlying provider.
    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    /// Embed a batch of texts, returning unit-normalized vectors in
    /// input order.
    pub async fn embed_batch(&self, texts: &[String]) -> AppResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(
            "Embedding {} texts with {} ({})",
            texts.len(),
            self.provider.provider_name(),
            self.provider.model_name()
        );

        let mut embeddings = self.provider.embed_batch(texts).await?;
        for embedding in &mut embeddings {
            normalize(embedding);
        }
        Ok(embeddings)
    }

    /// Embed a single text, returning a unit-normalized vector.
    pub async fn embed_one(&self, text: &str) -> AppResult<Vec<f32>> {
        let mut embedding = self.provider.embed(text).await?;
        normalize(&mut embedding);
        Ok(embedding)
    }
}

/// Scale a vector to unit L2 length in place.
///
/// A zero vector has no direction and is left untouched; it scores 0
/// against everything.
fn normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigram_embedder() -> Embedder {
        Embedder::new(create_provider("trigram", "trigram-v1", None).unwrap())
    }

    fn l2_norm(v: &[f32]) -> f32 {
        v.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    #[tokio::test]
    async fn test_vectors_are_unit_length() {
        let embedder = trigram_embedder();
        let texts = vec![
            "Standard users get 100 requests per minute.".to_string(),
            "To authenticate, pass the key in the X-API-KEY header.".to_string(),
        ];

        let embeddings = embedder.embed_batch(&texts).await.unwrap();
        assert_eq!(embeddings.len(), 2);
        for embedding in &embeddings {
            assert!((l2_norm(embedding) - 1.0).abs() < 1e-5);
        }
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let embedder = trigram_embedder();
        let embeddings = embedder.embed_batch(&[]).await.unwrap();
        assert!(embeddings.is_empty());
    }

    #[tokio::test]
    async fn test_deterministic_for_same_text() {
        let embedder = trigram_embedder();
        let a = embedder.embed_one("rate limit question").await.unwrap();
        let b = embedder.embed_one("rate limit question").await.unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_normalize_zero_vector_untouched() {
        let mut v = vec![0.0_f32; 8];
        normalize(&mut v);
        assert!(v.iter().all(|x| *x == 0.0));
    }
}

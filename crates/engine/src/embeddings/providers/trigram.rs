//! Deterministic offline embedding provider.
//!
//! Hashes word and character-trigram features into a fixed-dimension
//! vector. Not semantically comparable to a neural model, but fully
//! deterministic and dependency-free, which makes it the provider of
//! choice for tests and air-gapped runs: similar wording still lands in
//! similar directions.

use crate::embeddings::provider::EmbeddingProvider;
use askdocs_core::AppResult;
use std::collections::HashMap;

/// Fixed dimensionality of the trigram model.
const TRIGRAM_DIMENSIONS: usize = 384;

/// Common words carrying no topical signal, skipped during feature
/// extraction.
const STOP_WORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "a", "an", "as", "are", "was", "were", "for", "to", "of",
    "in", "and", "or", "but", "with", "by", "from", "this", "that", "be", "have", "has", "had",
    "it", "its", "their", "they", "them", "what", "how", "do", "does",
];

/// Character-trigram hashing embedder.
#[derive(Debug)]
pub struct TrigramProvider {
    dimensions: usize,
}

impl TrigramProvider {
    /// Create a provider with a custom dimensionality.
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn extract_words(text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| w.len() > 2 && !STOP_WORDS.contains(w))
            .map(|w| w.to_string())
            .collect()
    }

    fn feature_vector(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dimensions];

        let mut word_freq: HashMap<String, u32> = HashMap::new();
        for word in Self::extract_words(text) {
            *word_freq.entry(word).or_insert(0) += 1;
        }

        for (word, freq) in &word_freq {
            // Whole-word feature
            vector[self.bucket(word.as_bytes(), 31)] += *freq as f32;

            // Character trigram features; sqrt scaling keeps frequent
            // words from drowning out everything else
            let chars: Vec<char> = word.chars().collect();
            for trigram in chars.windows(3) {
                let key: String = trigram.iter().collect();
                vector[self.bucket(key.as_bytes(), 37)] += (*freq as f32).sqrt();
            }
        }

        vector
    }

    fn bucket(&self, bytes: &[u8], seed: u64) -> usize {
        let hash = bytes
            .iter()
            .fold(0u64, |acc, b| acc.wrapping_mul(seed).wrapping_add(*b as u64));
        (hash as usize) % self.dimensions
    }
}

impl Default for TrigramProvider {
    fn default() -> Self {
        Self::new(TRIGRAM_DIMENSIONS)
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for TrigramProvider {
    fn provider_name(&self) -> &str {
        "trigram"
    }

    fn model_name(&self) -> &str {
        "trigram-v1"
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    async fn embed_batch(&self, texts: &[String]) -> AppResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|text| self.feature_vector(text)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    fn unit(mut v: Vec<f32>) -> Vec<f32> {
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut v {
                *x /= norm;
            }
        }
        v
    }

    #[tokio::test]
    async fn test_dimensions_and_determinism() {
        let provider = TrigramProvider::default();
        assert_eq!(provider.dimensions(), 384);

        let a = provider.embed("enterprise rate limit").await.unwrap();
        let b = provider.embed("enterprise rate limit").await.unwrap();
        assert_eq!(a.len(), 384);
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_related_text_scores_higher_than_unrelated() {
        let provider = TrigramProvider::default();
        let corpus = provider
            .embed("Enterprise users get 500 requests per minute.")
            .await
            .unwrap();
        let related = provider
            .embed("What is the enterprise requests limit per minute?")
            .await
            .unwrap();
        let unrelated = provider.embed("The weather is sunny today.").await.unwrap();

        let corpus = unit(corpus);
        let related = unit(related);
        let unrelated = unit(unrelated);

        assert!(dot(&corpus, &related) > dot(&corpus, &unrelated));
    }

    #[tokio::test]
    async fn test_stop_words_ignored() {
        let provider = TrigramProvider::default();
        let with = provider.embed("the rate limit").await.unwrap();
        let without = provider.embed("rate limit").await.unwrap();
        assert_eq!(with, without);
    }

    #[tokio::test]
    async fn test_empty_text_yields_zero_vector() {
        let provider = TrigramProvider::default();
        let embedding = provider.embed("").await.unwrap();
        assert!(embedding.iter().all(|x| *x == 0.0));
    }
}

//! Exact flat vector index.
//!
//! Stores unit vectors in insertion order and answers top-k queries by
//! brute-force inner product, which equals cosine similarity for unit
//! vectors. The corpus is small, so exact search is both affordable and
//! required: no approximation, no relevance floor. The index is
//! immutable once built; any corpus change means a full rebuild.

use askdocs_core::{AppError, AppResult};

/// Flat inner-product index over unit vectors.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    dimensions: usize,
    vectors: Vec<Vec<f32>>,
}

impl FlatIndex {
    /// Build an index from vectors in insertion order.
    ///
    /// Position `i` in the index corresponds to input vector `i`; callers
    /// keep their chunk list position-aligned with this. All vectors must
    /// share one dimensionality.
    pub fn build(vectors: Vec<Vec<f32>>) -> AppResult<Self> {
        let dimensions = vectors.first().map(|v| v.len()).unwrap_or(0);

        for (position, vector) in vectors.iter().enumerate() {
            if vector.len() != dimensions {
                return Err(AppError::Embedding(format!(
                    "Vector at position {} has {} dimensions, expected {}",
                    position,
                    vector.len(),
                    dimensions
                )));
            }
        }

        Ok(Self {
            dimensions,
            vectors,
        })
    }

    /// Number of indexed vectors.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// True if the index holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Vector dimensionality (0 for an empty index).
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Find the `k` highest inner-product matches for a query vector.
    ///
    /// Results are `(position, score)` pairs in descending score order;
    /// ties break by ascending position (first-inserted wins). Returns
    /// all vectors when fewer than `k` exist. Never mutates the index.
    pub fn search(&self, query: &[f32], k: usize) -> AppResult<Vec<(usize, f32)>> {
        if self.vectors.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        if query.len() != self.dimensions {
            return Err(AppError::Embedding(format!(
                "Query vector has {} dimensions, index expects {}",
                query.len(),
                self.dimensions
            )));
        }

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(position, vector)| (position, dot(query, vector)))
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        scored.truncate(k);
        Ok(scored)
    }
}

/// Inner product of two equal-length vectors.
fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

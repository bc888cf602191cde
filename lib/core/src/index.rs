use crate::{kernels, Error, Result, Vector};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Index size at which query scoring fans out over the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

/// Exact cosine k-nearest-neighbor index over a fixed set of vectors.
///
/// The index is immutable: it is built in one pass from an aligned list of
/// vectors and item references and replaced wholesale when the catalog
/// changes. Queries scan every stored vector, which is fine for catalogs in
/// the tens to low thousands of items.
///
/// Ranking contract: similarity descending, ties broken by insertion order.
#[derive(Debug, Clone)]
pub struct SimilarityIndex<R> {
    dim: usize,
    vectors: Vec<Vector>,
    norms: Vec<f32>,
    refs: Vec<R>,
    parallel_threshold: usize,
}

impl<R: Clone + Send + Sync> SimilarityIndex<R> {
    /// Build an index from vectors and the item references they belong to.
    ///
    /// Every vector must have the width of the first one; a skewed vector is
    /// rejected rather than padded or truncated.
    pub fn build(vectors: Vec<Vector>, refs: Vec<R>) -> Result<Self> {
        if vectors.len() != refs.len() {
            return Err(Error::LengthMismatch {
                vectors: vectors.len(),
                refs: refs.len(),
            });
        }

        let dim = vectors.first().map(Vector::dim).unwrap_or(0);
        if let Some(bad) = vectors.iter().find(|v| v.dim() != dim) {
            return Err(Error::DimensionMismatch {
                expected: dim,
                actual: bad.dim(),
            });
        }

        let norms = vectors.iter().map(Vector::norm).collect();

        Ok(Self {
            dim,
            vectors,
            norms,
            refs,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        })
    }

    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    /// Vector width, 0 for an empty index
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn refs(&self) -> &[R] {
        &self.refs
    }

    /// Return the `min(k, len)` most similar items to `query`.
    ///
    /// An empty index or `k == 0` yields an empty result. A query whose width
    /// differs from the index is an encoder/index skew and fails with
    /// [`Error::DimensionMismatch`].
    pub fn query(&self, query: &Vector, k: usize) -> Result<Vec<(R, f32)>> {
        if k == 0 || self.vectors.is_empty() {
            return Ok(Vec::new());
        }

        if query.dim() != self.dim {
            return Err(Error::DimensionMismatch {
                expected: self.dim,
                actual: query.dim(),
            });
        }

        let scores = self.score_all(query);
        let mut ranked: Vec<(usize, f32)> = scores.into_iter().enumerate().collect();

        if k < ranked.len() {
            ranked.select_nth_unstable_by(k - 1, rank_order);
            ranked.truncate(k);
        }
        ranked.sort_unstable_by(rank_order);

        Ok(ranked
            .into_iter()
            .map(|(position, score)| (self.refs[position].clone(), score))
            .collect())
    }

    fn score_all(&self, query: &Vector) -> Vec<f32> {
        let query_norm = query.norm();
        let score = |(vector, norm): (&Vector, &f32)| -> f32 {
            kernels::cosine_with_norms(query.as_slice(), vector.as_slice(), query_norm, *norm)
        };

        if self.vectors.len() >= self.parallel_threshold {
            tracing::trace!(n = self.vectors.len(), "scoring index in parallel");
            self.vectors.par_iter().zip(self.norms.par_iter()).map(score).collect()
        } else {
            self.vectors.iter().zip(self.norms.iter()).map(score).collect()
        }
    }
}

/// Similarity descending, then insertion position ascending.
fn rank_order(a: &(usize, f32), b: &(usize, f32)) -> Ordering {
    b.1.total_cmp(&a.1).then(a.0.cmp(&b.0))
}

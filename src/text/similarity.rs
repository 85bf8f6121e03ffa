//! Document similarity over term-count vectors.
//!
//! # Quick Start
//!
//! ```
//! use cinematch::text::similarity::{cosine_similarity, pairwise_cosine_similarity};
//! use cinematch::text::vectorize::TermVector;
//!
//! let a = TermVector::from_counts([(0, 1), (1, 1)]);
//! let b = TermVector::from_counts([(0, 1), (1, 1)]);
//! let c = TermVector::from_counts([(2, 1)]);
//!
//! assert_eq!(cosine_similarity(&a, &b), 1.0);
//! assert_eq!(cosine_similarity(&a, &c), 0.0);
//!
//! let matrix = pairwise_cosine_similarity(&[a, b, c]);
//! assert_eq!(matrix.shape(), (3, 3));
//! ```

use std::cmp::Ordering;

use crate::primitives::Matrix;
use crate::text::vectorize::TermVector;

/// Compute cosine similarity between two term-count vectors.
///
/// ```text
/// cosine_sim(A, B) = (A · B) / sqrt(||A||² * ||B||²)
/// ```
///
/// Counts are non-negative, so the result lies in `[0, 1]`. Either vector
/// being zero yields `0.0`.
///
/// # Examples
///
/// ```
/// use cinematch::text::similarity::cosine_similarity;
/// use cinematch::text::vectorize::TermVector;
///
/// let a = TermVector::from_counts([(0, 1), (1, 1)]);
/// let b = TermVector::from_counts([(0, 1)]);
///
/// let sim = cosine_similarity(&a, &b);
/// assert!((sim - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// ```
#[must_use]
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let norm_a = a.squared_norm();
    let norm_b = b.squared_norm();

    if norm_a == 0 || norm_b == 0 {
        return 0.0; // Zero vector is orthogonal to everything
    }

    // One sqrt over the product of integer squared norms keeps parallel
    // vectors at exactly 1.0
    let sim = a.dot(b) as f64 / (norm_a as f64 * norm_b as f64).sqrt();
    sim.clamp(0.0, 1.0)
}

/// Initialize similarity matrix with self-similarity on the diagonal.
fn init_similarity_matrix(vectors: &[TermVector]) -> Matrix<f64> {
    let n = vectors.len();
    let mut matrix = Matrix::zeros(n, n);
    for (i, v) in vectors.iter().enumerate() {
        matrix.set(i, i, if v.is_zero() { 0.0 } else { 1.0 });
    }
    matrix
}

/// Compute pairwise cosine similarities between all documents.
///
/// Element `(i, j)` is the cosine similarity between document `i` and
/// document `j`. The matrix is symmetric; the diagonal is `1.0` for
/// documents with at least one term and `0.0` for empty ones.
///
/// # Examples
///
/// ```
/// use cinematch::text::similarity::pairwise_cosine_similarity;
/// use cinematch::text::vectorize::TermVector;
///
/// let docs = vec![
///     TermVector::from_counts([(0, 1)]),
///     TermVector::default(),
/// ];
///
/// let m = pairwise_cosine_similarity(&docs);
/// assert_eq!(m.get(0, 0), 1.0);
/// assert_eq!(m.get(1, 1), 0.0);
/// ```
#[must_use]
pub fn pairwise_cosine_similarity(vectors: &[TermVector]) -> Matrix<f64> {
    let n = vectors.len();
    let mut similarities = init_similarity_matrix(vectors);

    // Compute upper triangle only (use symmetry)
    for i in 0..n {
        for j in (i + 1)..n {
            let sim = cosine_similarity(&vectors[i], &vectors[j]);
            similarities.set(i, j, sim);
            similarities.set(j, i, sim);
        }
    }

    similarities
}

/// Descending by score, ascending by index on ties.
fn rank_order(a: &(usize, f64), b: &(usize, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Find the top-k entries of a similarity row.
///
/// Returns `(index, score)` pairs sorted by score (highest first), with
/// ties broken by ascending index. `exclude` removes one index (the query
/// row itself) from consideration. Fewer than `k` candidates returns all
/// of them.
///
/// # Examples
///
/// ```
/// use cinematch::text::similarity::top_k_similar;
///
/// let row = [1.0, 0.2, 0.9, 0.2];
///
/// let top = top_k_similar(&row, 2, Some(0));
/// assert_eq!(top, vec![(2, 0.9), (1, 0.2)]);
/// ```
#[must_use]
pub fn top_k_similar(scores: &[f64], k: usize, exclude: Option<usize>) -> Vec<(usize, f64)> {
    let mut candidates: Vec<(usize, f64)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|&(idx, _)| Some(idx) != exclude)
        .collect();

    if k == 0 {
        return Vec::new();
    }

    // Partial selection first; only the kept prefix needs a full sort
    if k < candidates.len() {
        candidates.select_nth_unstable_by(k - 1, rank_order);
        candidates.truncate(k);
    }
    candidates.sort_unstable_by(rank_order);

    candidates
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;

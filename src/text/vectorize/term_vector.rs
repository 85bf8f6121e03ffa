//! Sparse term-count vectors.

use serde::{Deserialize, Serialize};

/// Sparse vector of term counts over a vocabulary.
///
/// Stores `(term index, count)` pairs sorted by term index with no zero
/// counts, so two vectors can be combined with a linear merge.
///
/// # Examples
///
/// ```
/// use cinematch::text::vectorize::TermVector;
///
/// let v = TermVector::from_counts([(2, 1), (0, 3), (2, 1)]);
/// assert_eq!(v.entries(), &[(0, 3), (2, 2)]);
/// assert_eq!(v.count(2), 2);
/// assert_eq!(v.squared_norm(), 13);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermVector {
    entries: Vec<(usize, u32)>,
}

impl TermVector {
    /// Build a vector from `(term index, count)` pairs in any order.
    ///
    /// Repeated indices are summed and zero counts dropped.
    pub fn from_counts(counts: impl IntoIterator<Item = (usize, u32)>) -> Self {
        let mut entries: Vec<(usize, u32)> = counts.into_iter().filter(|&(_, c)| c > 0).collect();
        entries.sort_unstable_by_key(|&(idx, _)| idx);
        entries.dedup_by(|next, kept| {
            if next.0 == kept.0 {
                kept.1 += next.1;
                true
            } else {
                false
            }
        });
        Self { entries }
    }

    /// Non-zero `(term index, count)` pairs, sorted by index.
    #[must_use]
    pub fn entries(&self) -> &[(usize, u32)] {
        &self.entries
    }

    /// Count for a term index (0 when absent).
    #[must_use]
    pub fn count(&self, term: usize) -> u32 {
        self.entries
            .binary_search_by_key(&term, |&(idx, _)| idx)
            .map_or(0, |pos| self.entries[pos].1)
    }

    /// Number of distinct terms present.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether every count is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of term occurrences.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, c)| u64::from(c)).sum()
    }

    /// Dot product with another vector over the same vocabulary.
    #[must_use]
    pub fn dot(&self, other: &Self) -> u64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0u64;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_count) = self.entries[i];
            let (b_idx, b_count) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += u64::from(a_count) * u64::from(b_count);
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Squared Euclidean norm (`self · self`).
    #[must_use]
    pub fn squared_norm(&self) -> u64 {
        self.entries
            .iter()
            .map(|&(_, c)| u64::from(c) * u64::from(c))
            .sum()
    }

    /// Dense representation with `dim` slots.
    ///
    /// Entries with an index `>= dim` are dropped.
    #[must_use]
    pub fn to_dense(&self, dim: usize) -> Vec<f64> {
        let mut dense = vec![0.0; dim];
        for &(idx, count) in self.entries.iter().filter(|&&(idx, _)| idx < dim) {
            dense[idx] = f64::from(count);
        }
        dense
    }
}

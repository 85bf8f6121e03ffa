use tracing::info;

use crate::data::Catalog;
use crate::error::{RecommendError, Result};
use crate::primitives::Matrix;
use crate::text::similarity::pairwise_cosine_similarity;
use crate::text::vectorize::CountVectorizer;

/// A catalog paired with its pairwise cosine-similarity matrix.
///
/// Row `i` of the matrix belongs to row `i` of the catalog. The two are
/// only ever built together and there is no way to mutate either
/// afterwards, so the pairing cannot drift.
///
/// # Examples
///
/// ```
/// use cinematch::data::{Catalog, CatalogItem};
/// use cinematch::recommend::SimilarityIndex;
///
/// let catalog = Catalog::new(vec![
///     CatalogItem::new("Alpha", "cat dog"),
///     CatalogItem::new("Gamma", ""),
/// ]);
///
/// let index = SimilarityIndex::build(catalog).expect("non-empty catalog");
/// assert_eq!(index.similarity(0, 0), Some(1.0));
/// assert_eq!(index.similarity(1, 1), Some(0.0)); // empty features
/// ```
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    catalog: Catalog,
    matrix: Matrix<f64>,
    vocabulary_size: usize,
}

impl SimilarityIndex {
    /// Build the index with the default [`CountVectorizer`].
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::EmptyCatalog`] if the catalog has no rows.
    pub fn build(catalog: Catalog) -> Result<Self> {
        Self::build_with(catalog, CountVectorizer::new())
    }

    /// Build the index with a configured vectorizer.
    ///
    /// The vectorizer is fitted on the catalog's combined features, so any
    /// previously learned vocabulary is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::EmptyCatalog`] if the catalog has no rows,
    /// or a tokenizer error.
    pub fn build_with(catalog: Catalog, mut vectorizer: CountVectorizer) -> Result<Self> {
        if catalog.is_empty() {
            return Err(RecommendError::EmptyCatalog);
        }

        let vectors = vectorizer.fit_transform(&catalog.features())?;
        let matrix = pairwise_cosine_similarity(&vectors);
        let vocabulary_size = vectorizer.vocabulary_size();

        info!(
            rows = catalog.len(),
            vocabulary = vocabulary_size,
            empty_rows = vectors.iter().filter(|v| v.is_zero()).count(),
            "built similarity index"
        );

        Ok(Self {
            catalog,
            matrix,
            vocabulary_size,
        })
    }

    /// The indexed catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The similarity matrix, in catalog row order.
    #[must_use]
    pub fn matrix(&self) -> &Matrix<f64> {
        &self.matrix
    }

    /// Number of distinct terms across the catalog.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// Number of indexed rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Always false: an index is never built over an empty catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Similarity between rows `i` and `j`, if both are in range.
    #[must_use]
    pub fn similarity(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.len() && j < self.len()).then(|| self.matrix.get(i, j))
    }

    /// Similarity row for `row`, if in range.
    #[must_use]
    pub fn scores(&self, row: usize) -> Option<&[f64]> {
        (row < self.len()).then(|| self.matrix.row(row))
    }

    /// Split into the catalog and matrix.
    #[must_use]
    pub fn into_parts(self) -> (Catalog, Matrix<f64>) {
        (self.catalog, self.matrix)
    }
}

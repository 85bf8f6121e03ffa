//! Title lookup and top-k ranking over a [`SimilarityIndex`].

use serde::Serialize;
use tracing::debug;

use super::SimilarityIndex;
use crate::data::{normalize_title, Catalog};
use crate::error::{RecommendError, Result};
use crate::text::similarity::top_k_similar;

/// Number of recommendations returned per query unless configured otherwise.
pub const DEFAULT_TOP_K: usize = 5;

/// One recommended item with its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Catalog row of the recommended item
    pub row: usize,
    /// Title as stored in the catalog
    pub title: String,
    /// Cosine similarity to the queried item, in `[0, 1]`
    pub score: f64,
}

/// Content-based recommender over a prebuilt [`SimilarityIndex`].
///
/// Queries are exact, case-insensitive title matches after trimming. The
/// result excludes the queried item and holds at most `top_k` titles,
/// highest similarity first; equal scores keep catalog order.
///
/// # Examples
///
/// ```
/// use cinematch::data::{Catalog, CatalogItem};
/// use cinematch::recommend::ContentRecommender;
///
/// let catalog = Catalog::new(vec![
///     CatalogItem::new("doc1", "machine learning algorithms"),
///     CatalogItem::new("doc2", "deep learning neural networks"),
///     CatalogItem::new("doc3", "machine learning applications"),
/// ]);
///
/// let recommender = ContentRecommender::from_catalog(catalog)
///     .expect("catalog is non-empty")
///     .with_top_k(1)
///     .expect("k > 0");
///
/// assert_eq!(recommender.recommend("DOC1").expect("item exists"), vec!["doc3"]);
/// ```
#[derive(Debug, Clone)]
pub struct ContentRecommender {
    index: SimilarityIndex,
    top_k: usize,
}

impl ContentRecommender {
    /// Wrap a built index with the default cutoff of [`DEFAULT_TOP_K`].
    #[must_use]
    pub fn new(index: SimilarityIndex) -> Self {
        Self {
            index,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Build the index over `catalog` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::EmptyCatalog`] if the catalog has no rows.
    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        Ok(Self::new(SimilarityIndex::build(catalog)?))
    }

    /// Set the number of recommendations per query.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::InvalidParameter`] if `k` is 0.
    pub fn with_top_k(mut self, k: usize) -> Result<Self> {
        if k == 0 {
            return Err(RecommendError::invalid_parameter("top_k", k, ">0"));
        }
        self.top_k = k;
        Ok(self)
    }

    /// Configured cutoff.
    #[must_use]
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// The underlying index.
    #[must_use]
    pub fn index(&self) -> &SimilarityIndex {
        &self.index
    }

    /// Catalog row matching `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::NotFound`] if no title matches.
    pub fn resolve(&self, name: &str) -> Result<usize> {
        self.index
            .catalog()
            .position(name)
            .ok_or_else(|| RecommendError::NotFound {
                name: name.trim().to_string(),
            })
    }

    /// Titles most similar to `name`, highest similarity first.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::NotFound`] if no title matches.
    pub fn recommend(&self, name: &str) -> Result<Vec<String>> {
        Ok(self
            .recommend_with_scores(name)?
            .into_iter()
            .map(|r| r.title)
            .collect())
    }

    /// Like [`recommend`](Self::recommend), keeping rows and scores.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::NotFound`] if no title matches.
    pub fn recommend_with_scores(&self, name: &str) -> Result<Vec<Recommendation>> {
        let row = self.resolve(name)?;
        let recommendations = self.similar_to_row(row);

        debug!(
            query = %normalize_title(name),
            row,
            results = recommendations.len(),
            "resolved recommendation query"
        );
        Ok(recommendations)
    }

    /// Top-k rows most similar to `row`, excluding `row` itself.
    ///
    /// Out-of-range rows yield an empty list.
    #[must_use]
    pub fn similar_to_row(&self, row: usize) -> Vec<Recommendation> {
        let Some(scores) = self.index.scores(row) else {
            return Vec::new();
        };
        let catalog = self.index.catalog();

        top_k_similar(scores, self.top_k, Some(row))
            .into_iter()
            .filter_map(|(idx, score)| {
                catalog.get(idx).map(|item| Recommendation {
                    row: idx,
                    title: item.title.clone(),
                    score,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "content_based_tests.rs"]
mod tests;

//! Content-based recommendation.
//!
//! Item-to-item similarity over term-count vectors of each item's combined
//! features. [`SimilarityIndex`] owns a catalog together with its pairwise
//! cosine-similarity matrix; [`ContentRecommender`] resolves a title
//! against it and returns the most similar other items.
//!
//! # Quick Start
//!
//! ```
//! use cinematch::data::{Catalog, CatalogItem};
//! use cinematch::recommend::ContentRecommender;
//!
//! let catalog: Catalog = vec![
//!     CatalogItem::new("Alpha", "cat dog"),
//!     CatalogItem::new("Beta", "cat dog"),
//!     CatalogItem::new("Gamma", "fish"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let recommender = ContentRecommender::from_catalog(catalog).expect("catalog is non-empty");
//!
//! let recommendations = recommender.recommend("alpha").expect("item exists");
//! assert_eq!(recommendations, vec!["Beta", "Gamma"]);
//! ```

pub mod content_based;
mod index;

pub use content_based::{ContentRecommender, Recommendation, DEFAULT_TOP_K};
pub use index::SimilarityIndex;

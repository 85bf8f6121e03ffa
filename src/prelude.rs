//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use cinematch::prelude::*;
//! ```

pub use crate::data::{Catalog, CatalogItem, CatalogOptions};
pub use crate::error::RecommendError;
pub use crate::primitives::Matrix;
pub use crate::recommend::{ContentRecommender, Recommendation, SimilarityIndex, DEFAULT_TOP_K};
pub use crate::text::similarity::{cosine_similarity, pairwise_cosine_similarity};
pub use crate::text::vectorize::{CountVectorizer, TermVector};
pub use crate::text::Tokenizer;

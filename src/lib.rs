//! cinematch: content-based movie recommendations in pure Rust.
//!
//! Each catalog item carries a combined text feature (genres, cast,
//! keywords, ...). The index builder turns those strings into term-count
//! vectors, computes one pairwise cosine-similarity matrix, and queries
//! read the matched item's row to return its nearest neighbours.
//!
//! # Quick Start
//!
//! ```
//! use cinematch::prelude::*;
//!
//! let data = "\
//! movie_title,comb
//! alpha,cat dog
//! beta,cat dog
//! gamma,fish
//! ";
//!
//! let catalog = Catalog::from_reader(data.as_bytes(), &CatalogOptions::default())
//!     .expect("valid catalog");
//! let recommender = ContentRecommender::from_catalog(catalog).expect("non-empty catalog");
//!
//! assert_eq!(recommender.recommend("Alpha").expect("known title"), vec!["beta", "gamma"]);
//! assert!(recommender.recommend("ZzzNotAMovie").is_err());
//! ```
//!
//! # Modules
//!
//! - [`data`]: Catalog items and delimited-file loading
//! - [`text`]: Tokenization, count vectorization and cosine similarity
//! - [`recommend`]: Similarity index and top-k recommendation queries
//! - [`primitives`]: Dense matrix storage
//! - [`error`]: Error type shared by all operations

pub mod data;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod text;

pub use error::{RecommendError, Result};

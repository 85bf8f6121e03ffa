//! Text processing for combined-feature strings.
//!
//! - [`tokenize`]: splitting feature text into terms
//! - [`vectorize`]: term-count vectors over a shared vocabulary
//! - [`similarity`]: cosine similarity and top-k ranking

use crate::error::Result;

pub mod similarity;
pub mod tokenize;
pub mod vectorize;

/// Splits text into string tokens.
///
/// # Examples
///
/// ```
/// use cinematch::text::{Tokenizer, tokenize::WordTokenizer};
///
/// let tokens = WordTokenizer::new().tokenize("action, sci-fi").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["action", "sci", "fi"]);
/// ```
pub trait Tokenizer {
    /// Tokenize `text` into a sequence of tokens, in order of appearance.
    ///
    /// # Errors
    ///
    /// Implementations may reject input they cannot process.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

//! Tokenization of combined-feature text.
//!
//! Two strategies are provided:
//! - [`WordTokenizer`] (default): runs of word characters, punctuation and
//!   whitespace both act as delimiters
//! - [`WhitespaceTokenizer`]: splits on Unicode whitespace only, keeping
//!   punctuation attached to words
//!
//! Both implement [`Tokenizer`] and never fail on any input.

use crate::error::Result;
use crate::text::Tokenizer;

/// Word tokenizer that splits on anything that is not a word character.
///
/// Word characters are Unicode alphanumerics and `_`. Every other character
/// (whitespace, punctuation, symbols) ends the current token and is dropped,
/// so `"sci-fi"` yields `["sci", "fi"]` and `"don't"` yields `["don", "t"]`.
///
/// # Examples
///
/// ```
/// use cinematch::text::{Tokenizer, tokenize::WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
///
/// let tokens = tokenizer.tokenize("Action|Adventure Sam_Worthington").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Action", "Adventure", "Sam_Worthington"]);
///
/// let tokens = tokenizer.tokenize("  ...  ").expect("tokenize should succeed");
/// assert!(tokens.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .split(|c: char| !Self::is_word_char(c))
            .filter(|t| !t.is_empty())
            .map(ToString::to_string)
            .collect())
    }
}

/// Whitespace tokenizer that splits text on Unicode whitespace characters.
///
/// Punctuation stays attached to words.
///
/// # Examples
///
/// ```
/// use cinematch::text::{Tokenizer, tokenize::WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
///
/// let tokens = tokenizer.tokenize("Hello, world!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Hello,", "world!"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(ToString::to_string).collect())
    }
}

#[cfg(test)]
mod tests;

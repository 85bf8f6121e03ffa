use std::collections::HashMap;

use tracing::debug;

use super::TermVector;
use crate::error::{RecommendError, Result};
use crate::text::tokenize::WordTokenizer;
use crate::text::Tokenizer;

/// Count vectorizer that converts text to sparse term-count vectors.
///
/// The vocabulary holds every distinct term seen during [`fit`](Self::fit),
/// in first-seen order, so index `0` is the first term of the first
/// document. Terms only seen at transform time are ignored.
///
/// # Examples
///
/// ```
/// use cinematch::text::vectorize::CountVectorizer;
///
/// let docs = vec!["cat dog", "dog bird", "cat bird bird"];
///
/// let mut vectorizer = CountVectorizer::new();
/// let vectors = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
///
/// assert_eq!(vectorizer.vocabulary(), &["cat", "dog", "bird"]);
/// assert_eq!(vectors[2].count(2), 2); // "bird" twice in doc 2
/// ```
#[allow(missing_debug_implementations)]
pub struct CountVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    vocabulary: Vec<String>,
    term_index: HashMap<String, usize>,
    lowercase: bool,
    min_token_len: usize,
}

impl CountVectorizer {
    /// Create a new `CountVectorizer` with a [`WordTokenizer`], lowercasing
    /// enabled and no minimum token length.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(WordTokenizer::new()),
            vocabulary: Vec::new(),
            term_index: HashMap::new(),
            lowercase: true,
            min_token_len: 1,
        }
    }

    /// Set the tokenizer to use.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinematch::text::vectorize::CountVectorizer;
    /// use cinematch::text::tokenize::WhitespaceTokenizer;
    ///
    /// let vectorizer = CountVectorizer::new()
    ///     .with_tokenizer(Box::new(WhitespaceTokenizer::new()));
    /// ```
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set whether to convert tokens to lowercase.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Ignore tokens shorter than `min_len` characters.
    ///
    /// `2` matches vectorizers that only count words of two or more
    /// characters. Values below 1 are treated as 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinematch::text::vectorize::CountVectorizer;
    ///
    /// let mut vectorizer = CountVectorizer::new().with_min_token_len(2);
    /// vectorizer.fit(&["a quiet place"]).expect("fit should succeed");
    /// assert_eq!(vectorizer.vocabulary(), &["quiet", "place"]);
    /// ```
    #[must_use]
    pub fn with_min_token_len(mut self, min_len: usize) -> Self {
        self.min_token_len = min_len.max(1);
        self
    }

    /// Tokenize and normalize one document the way `fit` and `transform` see it.
    ///
    /// # Errors
    ///
    /// Propagates tokenizer failures.
    pub fn analyze(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(tokens
            .into_iter()
            .map(|t| if self.lowercase { t.to_lowercase() } else { t })
            .filter(|t| t.chars().count() >= self.min_token_len)
            .collect())
    }

    /// Learn the vocabulary from documents and transform them to term vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if `documents` is empty or tokenization fails.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Vec<TermVector>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Learn the vocabulary from documents, replacing any previous one.
    ///
    /// Documents without any term are allowed; if every document is empty
    /// the vocabulary is empty and every transformed vector is zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `documents` is empty or tokenization fails.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(RecommendError::invalid_parameter(
                "documents",
                "[]",
                "at least one document",
            ));
        }

        let mut vocabulary = Vec::new();
        let mut term_index = HashMap::new();

        for doc in documents {
            for term in self.analyze(doc.as_ref())? {
                if !term_index.contains_key(&term) {
                    term_index.insert(term.clone(), vocabulary.len());
                    vocabulary.push(term);
                }
            }
        }

        debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "fitted count vectorizer"
        );

        self.vocabulary = vocabulary;
        self.term_index = term_index;
        Ok(())
    }

    /// Transform documents to term vectors using the learned vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<TermVector>> {
        documents
            .iter()
            .map(|doc| self.transform_one(doc.as_ref()))
            .collect()
    }

    /// Transform a single document.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    pub fn transform_one(&self, text: &str) -> Result<TermVector> {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for term in self.analyze(text)? {
            if let Some(&idx) = self.term_index.get(&term) {
                *counts.entry(idx).or_insert(0) += 1;
            }
        }
        Ok(TermVector::from_counts(counts))
    }

    /// Learned vocabulary in first-seen order.
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Vocabulary index of `term`, if learned.
    #[must_use]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.term_index.get(term).copied()
    }

    /// Get the vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

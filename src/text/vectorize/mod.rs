//! Text vectorization.
//!
//! [`CountVectorizer`] learns a vocabulary over a corpus and maps each
//! document to a sparse [`TermVector`] of term counts.

mod count_vectorizer;
mod term_vector;

pub use count_vectorizer::CountVectorizer;
pub use term_vector::TermVector;

#[cfg(test)]
mod tests;

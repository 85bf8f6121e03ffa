pub(crate) use super::*;
pub(crate) use crate::error::RecommendError;
pub(crate) use crate::text::tokenize::WhitespaceTokenizer;

#[test]
fn test_count_vectorizer_basic() {
    let docs = vec!["cat dog", "dog bird", "cat bird bird"];

    let mut vectorizer = CountVectorizer::new();
    let vectors = vectorizer
        .fit_transform(&docs)
        .expect("fit_transform should succeed");

    assert_eq!(vectors.len(), 3);
    assert_eq!(vectorizer.vocabulary_size(), 3);
    assert_eq!(vectors[0].entries(), &[(0, 1), (1, 1)]);
    assert_eq!(vectors[1].entries(), &[(1, 1), (2, 1)]);
    assert_eq!(vectors[2].entries(), &[(0, 1), (2, 2)]);
}

#[test]
fn test_vocabulary_first_seen_order() {
    let docs = vec!["zebra apple", "mango apple zebra", "kiwi"];

    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&docs).expect("fit should succeed");

    assert_eq!(vectorizer.vocabulary(), &["zebra", "apple", "mango", "kiwi"]);
    assert_eq!(vectorizer.term_index("mango"), Some(2));
    assert_eq!(vectorizer.term_index("pear"), None);
}

#[test]
fn test_lowercase_merges_terms() {
    let docs = vec!["Action ACTION action"];

    let mut vectorizer = CountVectorizer::new();
    let vectors = vectorizer
        .fit_transform(&docs)
        .expect("fit_transform should succeed");

    assert_eq!(vectorizer.vocabulary(), &["action"]);
    assert_eq!(vectors[0].count(0), 3);
}

#[test]
fn test_lowercase_disabled() {
    let docs = vec!["Action action"];

    let mut vectorizer = CountVectorizer::new().with_lowercase(false);
    vectorizer.fit(&docs).expect("fit should succeed");

    assert_eq!(vectorizer.vocabulary(), &["Action", "action"]);
}

#[test]
fn test_min_token_len() {
    let docs = vec!["a b cd efg"];

    let mut vectorizer = CountVectorizer::new().with_min_token_len(2);
    vectorizer.fit(&docs).expect("fit should succeed");
    assert_eq!(vectorizer.vocabulary(), &["cd", "efg"]);

    let mut vectorizer = CountVectorizer::new().with_min_token_len(0);
    vectorizer.fit(&docs).expect("fit should succeed");
    assert_eq!(vectorizer.vocabulary_size(), 4);
}

#[test]
fn test_punctuation_delimits_terms() {
    let docs = vec!["Action|Adventure, Sci-Fi"];

    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&docs).expect("fit should succeed");

    assert_eq!(
        vectorizer.vocabulary(),
        &["action", "adventure", "sci", "fi"]
    );
}

#[test]
fn test_custom_tokenizer() {
    let docs = vec!["sci-fi drama"];

    let mut vectorizer =
        CountVectorizer::new().with_tokenizer(Box::new(WhitespaceTokenizer::new()));
    vectorizer.fit(&docs).expect("fit should succeed");

    assert_eq!(vectorizer.vocabulary(), &["sci-fi", "drama"]);
}

#[test]
fn test_empty_document_is_zero_vector() {
    let docs = vec!["cat", ""];

    let mut vectorizer = CountVectorizer::new();
    let vectors = vectorizer
        .fit_transform(&docs)
        .expect("fit_transform should succeed");

    assert!(!vectors[0].is_zero());
    assert!(vectors[1].is_zero());
}

#[test]
fn test_all_documents_empty() {
    let docs = vec!["", "  ", "..."];

    let mut vectorizer = CountVectorizer::new();
    let vectors = vectorizer
        .fit_transform(&docs)
        .expect("fit_transform should succeed");

    assert_eq!(vectorizer.vocabulary_size(), 0);
    assert!(vectors.iter().all(TermVector::is_zero));
}

#[test]
fn test_fit_empty_documents_error() {
    let docs: Vec<&str> = Vec::new();

    let mut vectorizer = CountVectorizer::new();
    let result = vectorizer.fit(&docs);

    assert!(matches!(
        result,
        Err(RecommendError::InvalidParameter { .. })
    ));
}

#[test]
fn test_transform_ignores_unknown_terms() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&["cat dog"]).expect("fit should succeed");

    let v = vectorizer
        .transform_one("dog whale dog")
        .expect("transform should succeed");
    assert_eq!(v.entries(), &[(1, 2)]);
}

#[test]
fn test_refit_replaces_vocabulary() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&["cat dog"]).expect("fit should succeed");
    vectorizer.fit(&["fish"]).expect("fit should succeed");

    assert_eq!(vectorizer.vocabulary(), &["fish"]);
    assert_eq!(vectorizer.term_index("cat"), None);
}

// ========== TermVector Tests ==========

#[test]
fn test_term_vector_from_counts_merges_and_sorts() {
    let v = TermVector::from_counts([(3, 1), (1, 2), (3, 4), (0, 0)]);
    assert_eq!(v.entries(), &[(1, 2), (3, 5)]);
    assert_eq!(v.nnz(), 2);
    assert_eq!(v.total(), 7);
}

#[test]
fn test_term_vector_dot_and_norm() {
    let a = TermVector::from_counts([(0, 1), (2, 3)]);
    let b = TermVector::from_counts([(1, 5), (2, 2), (4, 1)]);

    assert_eq!(a.dot(&b), 6);
    assert_eq!(b.dot(&a), 6);
    assert_eq!(a.squared_norm(), 10);
    assert_eq!(a.dot(&a), a.squared_norm());
}

#[test]
fn test_term_vector_to_dense() {
    let v = TermVector::from_counts([(0, 1), (2, 3)]);
    assert_eq!(v.to_dense(4), vec![1.0, 0.0, 3.0, 0.0]);
    assert_eq!(v.to_dense(1), vec![1.0]);
}

#[test]
fn test_term_vector_default_is_zero() {
    let v = TermVector::default();
    assert!(v.is_zero());
    assert_eq!(v.squared_norm(), 0);
    assert_eq!(v.count(7), 0);
}

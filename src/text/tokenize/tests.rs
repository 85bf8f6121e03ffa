use super::*;

// ========== WordTokenizer Tests ==========

#[test]
fn test_word_tokenizer_basic() {
    let tokenizer = WordTokenizer::new();

    let tokens = tokenizer
        .tokenize("cat dog")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["cat", "dog"]);
}

#[test]
fn test_word_tokenizer_drops_punctuation() {
    let tokenizer = WordTokenizer::new();

    let tokens = tokenizer
        .tokenize("Hello, world! (2009)")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["Hello", "world", "2009"]);
}

#[test]
fn test_word_tokenizer_splits_hyphens_and_apostrophes() {
    let tokenizer = WordTokenizer::new();

    let tokens = tokenizer
        .tokenize("sci-fi don't")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["sci", "fi", "don", "t"]);
}

#[test]
fn test_word_tokenizer_keeps_underscore() {
    let tokenizer = WordTokenizer::new();

    let tokens = tokenizer
        .tokenize("James_Cameron Zoe_Saldana")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["James_Cameron", "Zoe_Saldana"]);
}

#[test]
fn test_word_tokenizer_unicode_letters() {
    let tokenizer = WordTokenizer::new();

    let tokens = tokenizer
        .tokenize("Amélie café")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["Amélie", "café"]);
}

#[test]
fn test_word_tokenizer_preserves_case() {
    let tokenizer = WordTokenizer::new();

    let tokens = tokenizer.tokenize("Drama").expect("tokenize should succeed");
    assert_eq!(tokens, vec!["Drama"]);
}

#[test]
fn test_word_tokenizer_empty() {
    let tokenizer = WordTokenizer::new();

    assert!(tokenizer.tokenize("").expect("tokenize should succeed").is_empty());
    assert!(tokenizer
        .tokenize(" \t\n ,;")
        .expect("tokenize should succeed")
        .is_empty());
}

// ========== WhitespaceTokenizer Tests ==========

#[test]
fn test_whitespace_tokenizer_preserves_punctuation() {
    let tokenizer = WhitespaceTokenizer::new();

    let tokens = tokenizer
        .tokenize("Hello, world!")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["Hello,", "world!"]);
}

#[test]
fn test_whitespace_tokenizer_newlines_tabs() {
    let tokenizer = WhitespaceTokenizer::new();

    let tokens = tokenizer
        .tokenize("line1\nline2\ttab")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["line1", "line2", "tab"]);
}

use crate::preprocess::{DefaultPreprocessor, Preprocessor, unique_tokens};

#[test]
fn test_process_lowercases_and_strips_punctuation() {
    let processed = DefaultPreprocessor.process("  What does \"Abandon\" mean?! ");
    assert_eq!(processed, "what does abandon mean");
}

#[test]
fn test_process_folds_full_width_letters() {
    assert_eq!(DefaultPreprocessor.process("ＡＢＣ"), "abc");
}

#[test]
fn test_tokenize_empty_text() {
    assert!(DefaultPreprocessor.tokenize("").is_empty());
    assert!(DefaultPreprocessor.tokenize("?!").is_empty());
}

#[test]
fn test_unique_tokens_keep_first_seen_order() {
    let tokens = DefaultPreprocessor.tokenize("the cat and the hat");
    assert_eq!(tokens.len(), 5);
    assert_eq!(unique_tokens(&tokens), vec!["the", "cat", "and", "hat"]);
}

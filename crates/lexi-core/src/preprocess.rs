use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default English preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC) folds full-width letters and ligatures
        let text: String = text.nfkc().collect();

        // Keep ASCII letters, digits and whitespace only
        text.to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
            .collect()
    }

    /// Whitespace-separated tokens of the processed text, duplicates kept
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.process(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Tokens in first-seen order with duplicates removed
pub fn unique_tokens(tokens: &[String]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    tokens
        .iter()
        .map(String::as_str)
        .filter(|t| seen.insert(*t))
        .collect()
}

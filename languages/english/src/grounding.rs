//! Grounding context for tutor prompts.
//!
//! Picks the rarest corpus words mentioned in a message, resolves their
//! dictionary pages and renders a compact, delimited block the prompt can
//! point the model at.

use futures_util::future::join_all;
use lexi_config::grounding::GroundingConfig;
use lexi_core::preprocess::{DefaultPreprocessor, Preprocessor, unique_tokens};
use lexi_core::{ContentSource, CorpusIndex};
use lexi_types::{CorpusEntry, ParsedWordEntry};

use crate::resolver::ContentResolver;

pub const GROUNDING_BEGIN: &str = "[GROUNDING DATA FROM COCA DATABASE]";
pub const GROUNDING_END: &str = "[END GROUNDING DATA]";
const ENTRY_SEPARATOR: &str = "\n---\n";

pub struct GroundingBuilder<'a, S: ContentSource> {
    index: &'a CorpusIndex,
    resolver: &'a ContentResolver<S>,
    config: &'a GroundingConfig,
    preprocessor: DefaultPreprocessor,
}

impl<'a, S: ContentSource> GroundingBuilder<'a, S> {
    pub fn new(
        index: &'a CorpusIndex,
        resolver: &'a ContentResolver<S>,
        config: &'a GroundingConfig,
    ) -> Self {
        Self {
            index,
            resolver,
            config,
            preprocessor: DefaultPreprocessor,
        }
    }

    /// Corpus words worth grounding on, rarest first.
    ///
    /// Long inputs only consider words past the common-rank threshold. Short
    /// inputs keep every matched word, provided at least one of them is past
    /// the threshold; a message made only of filler words grounds nothing.
    pub fn select(&self, text: &str) -> Vec<&'a CorpusEntry> {
        let tokens = self.preprocessor.tokenize(text);
        let is_short = tokens.len() < self.config.short_query_tokens;
        let threshold = self.config.common_rank_threshold;

        let matches: Vec<&'a CorpusEntry> = unique_tokens(&tokens)
            .into_iter()
            .filter_map(|token| self.index.lookup(token))
            .collect();

        let mut selected: Vec<&'a CorpusEntry> = if is_short {
            if matches.iter().any(|entry| entry.rank > threshold) {
                matches
            } else {
                Vec::new()
            }
        } else {
            matches
                .into_iter()
                .filter(|entry| entry.rank > threshold)
                .collect()
        };

        selected.sort_by(|a, b| b.rank.cmp(&a.rank));
        selected.truncate(self.config.max_words);
        selected
    }

    /// Delimited grounding block for `text`, `None` when nothing qualifies
    pub async fn build_context(&self, text: &str) -> Option<String> {
        let selected = self.select(text);
        if selected.is_empty() {
            return None;
        }

        tracing::debug!(
            "Grounding on {:?}",
            selected.iter().map(|e| e.word.as_str()).collect::<Vec<_>>()
        );

        let parsed = join_all(
            selected
                .iter()
                .map(|entry| self.resolver.resolve_entry(entry)),
        )
        .await;

        let parts: Vec<String> = parsed
            .iter()
            .map(|entry| self.format_entry(entry))
            .collect();

        Some(format!(
            "{}\n{}\n{}",
            GROUNDING_BEGIN,
            parts.join(ENTRY_SEPARATOR),
            GROUNDING_END
        ))
    }

    fn format_entry(&self, entry: &ParsedWordEntry) -> String {
        let examples = entry
            .sampled_examples(self.config.max_blocks, self.config.examples_per_block)
            .into_iter()
            .map(|example| format!("- {}", example))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Word: {}\nPhonetic: {}\nDefinition: {}\nExamples:\n{}",
            entry.word,
            entry.phonetic,
            entry.display_definition(),
            examples
        )
    }
}

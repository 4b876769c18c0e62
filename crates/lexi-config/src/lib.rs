use std::env;

use serde::{Deserialize, Serialize};

use self::content::ContentConfig;
use self::grounding::GroundingConfig;
use self::selection::SelectionConfig;
use self::stats::StatsConfig;
use self::tutor::TutorConfig;

pub mod content;
pub mod grounding;
pub mod selection;
pub mod stats;
pub mod tutor;

#[cfg(test)]
mod tests;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub content: ContentConfig,
    pub selection: SelectionConfig,
    pub grounding: GroundingConfig,
    pub tutor: TutorConfig,
    pub stats: StatsConfig,

    /// Corpus file, JSON array of `{word, html}` or `word\thtml` lines
    pub corpus_path: String,
    /// Bounded capacity of the event channels
    pub channel_capacity: usize,
}

fn default_corpus_path() -> String {
    "data/coca.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: ContentConfig::default(),
            selection: SelectionConfig::default(),
            grounding: GroundingConfig::default(),
            tutor: TutorConfig::default(),
            stats: StatsConfig::default(),

            corpus_path: default_corpus_path(),
            channel_capacity: 64,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let corpus_path = env::var("LEXI_CORPUS_PATH").unwrap_or_else(|_| default_corpus_path());

        let channel_capacity = env::var("LEXI_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        Config {
            content: ContentConfig::new(),
            selection: SelectionConfig::default(),
            grounding: GroundingConfig::default(),
            tutor: TutorConfig::new(),
            stats: StatsConfig::new(),

            corpus_path,
            channel_capacity,
        }
    }
}

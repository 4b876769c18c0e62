use serde::{Deserialize, Serialize};

fn default_short_query_tokens() -> usize {
    5
}

fn default_common_rank_threshold() -> usize {
    200
}

fn default_max_words() -> usize {
    3
}

fn default_max_blocks() -> usize {
    2
}

fn default_examples_per_block() -> usize {
    1
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GroundingConfig {
    /// Inputs with fewer tokens than this count as short queries
    #[serde(default = "default_short_query_tokens")]
    pub short_query_tokens: usize,
    /// Words ranked at or below this are too common to ground on
    #[serde(default = "default_common_rank_threshold")]
    pub common_rank_threshold: usize,
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    #[serde(default = "default_max_blocks")]
    pub max_blocks: usize,
    #[serde(default = "default_examples_per_block")]
    pub examples_per_block: usize,
}

impl Default for GroundingConfig {
    fn default() -> Self {
        Self {
            short_query_tokens: default_short_query_tokens(),
            common_rank_threshold: default_common_rank_threshold(),
            max_words: default_max_words(),
            max_blocks: default_max_blocks(),
            examples_per_block: default_examples_per_block(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Tuning of the proficiency-based rank window and of round sizes.
///
/// Window start is `base_rank + level * per_level + min(xp / xp_divisor, xp_cap)
/// + streak * per_streak_day + jitter`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    pub base_rank: u32,
    pub per_level: u32,
    pub xp_divisor: u32,
    pub xp_cap: u32,
    pub per_streak_day: u32,
    /// Exclusive upper bound of the random offset added to the start
    pub jitter: u32,
    pub window_width: usize,
    pub min_candidates: usize,
    /// Words per flashcard round
    pub batch_size: usize,
    /// Options per quiz question, including the answer
    pub quiz_options: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            base_rank: 300,
            per_level: 50,
            xp_divisor: 10,
            xp_cap: 500,
            per_streak_day: 20,
            jitter: 50,
            window_width: 800,
            min_candidates: 20,
            batch_size: 20,
            quiz_options: 4,
        }
    }
}

//! Word selection for flashcard rounds and quizzes.
//!
//! A learner's proficiency maps to a contiguous rank window over the pool of
//! words they have not seen yet:
//!
//! 1. Start = base + level, capped XP and streak contributions
//! 2. A small random jitter varies consecutive rounds
//! 3. The window is clamped to the pool and shifted back when the tail is short

use std::collections::HashSet;

use lexi_config::selection::SelectionConfig;
use lexi_types::{CorpusEntry, UserStats};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::corpus::CorpusIndex;

/// Half-open range `[start, end)` of positions in a candidate pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankWindow {
    pub start: usize,
    pub end: usize,
}

impl RankWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    pub fn slice<'a, T>(&self, pool: &'a [T]) -> &'a [T] {
        let end = self.end.min(pool.len());
        let start = self.start.min(end);
        &pool[start..end]
    }
}

/// Window start before jitter
pub fn window_start(stats: &UserStats, config: &SelectionConfig) -> usize {
    let level = stats.level.saturating_mul(config.per_level);
    let xp = (stats.xp / config.xp_divisor.max(1)).min(config.xp_cap);
    let streak = stats.streak.saturating_mul(config.per_streak_day);

    config
        .base_rank
        .saturating_add(level)
        .saturating_add(xp)
        .saturating_add(streak) as usize
}

/// Clamp a window starting at `start` to a pool of `pool_len` words
pub fn clamp_window(start: usize, config: &SelectionConfig, pool_len: usize) -> RankWindow {
    let mut start = start;
    let end = start.saturating_add(config.window_width).min(pool_len);

    if end < start.saturating_add(config.min_candidates) {
        start = end.saturating_sub(config.min_candidates);
    }

    RankWindow { start, end }
}

/// Proficiency window over a pool of `pool_len` words
pub fn rank_window<R: Rng + ?Sized>(
    stats: &UserStats,
    config: &SelectionConfig,
    pool_len: usize,
    rng: &mut R,
) -> RankWindow {
    let jitter = if config.jitter > 0 {
        rng.gen_range(0..config.jitter) as usize
    } else {
        0
    };

    clamp_window(window_start(stats, config) + jitter, config, pool_len)
}

/// Candidate words for an AI-curated flashcard round.
///
/// Already-seen words are removed before the window is applied.
pub fn flashcard_candidates<'a, R: Rng + ?Sized>(
    index: &'a CorpusIndex,
    seen: &HashSet<String>,
    stats: &UserStats,
    config: &SelectionConfig,
    rng: &mut R,
) -> Vec<&'a CorpusEntry> {
    let pool = index.unseen(seen);
    let window = rank_window(stats, config, pool.len(), rng);

    tracing::debug!(
        "Flashcard window [{}, {}) over {} unseen words",
        window.start,
        window.end,
        pool.len()
    );

    window.slice(&pool).to_vec()
}

/// Local round used when curation is unavailable: a random run of unseen words
pub fn fallback_batch<'a, R: Rng + ?Sized>(
    index: &'a CorpusIndex,
    seen: &HashSet<String>,
    size: usize,
    rng: &mut R,
) -> Vec<&'a CorpusEntry> {
    let pool = index.unseen(seen);
    if pool.len() <= size {
        return pool;
    }

    let start = rng.gen_range(0..pool.len() - size);
    pool[start..start + size].to_vec()
}

/// Up to `count` distinct words from `pool`, none equal to `target`
pub fn pick_distractors<'a, R: Rng + ?Sized>(
    pool: &[&'a CorpusEntry],
    target: &str,
    count: usize,
    rng: &mut R,
) -> Vec<&'a CorpusEntry> {
    let mut seen = HashSet::new();
    let candidates: Vec<&CorpusEntry> = pool
        .iter()
        .copied()
        .filter(|entry| !entry.word.eq_ignore_ascii_case(target))
        .filter(|entry| seen.insert(entry.word.to_lowercase()))
        .collect();

    candidates
        .choose_multiple(rng, count)
        .copied()
        .collect()
}

/// Answer plus distractors in random order
pub fn shuffled_options<R: Rng + ?Sized>(
    target: &str,
    distractors: &[&CorpusEntry],
    rng: &mut R,
) -> Vec<String> {
    let mut options: Vec<String> = distractors.iter().map(|d| d.word.clone()).collect();
    options.push(target.to_string());
    options.shuffle(rng);
    options
}

use std::collections::HashSet;

use lexi_config::selection::SelectionConfig;
use lexi_types::UserStats;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::synthetic_index;
use crate::selection::{
    clamp_window, fallback_batch, flashcard_candidates, pick_distractors, rank_window,
    shuffled_options, window_start,
};

fn stats(level: u32, xp: u32, streak: u32) -> UserStats {
    UserStats {
        level,
        xp,
        streak,
        ..UserStats::default()
    }
}

#[test]
fn test_beginner_window_start() {
    let config = SelectionConfig::default();
    let start = window_start(&stats(1, 0, 1), &config);
    assert!((300..=370).contains(&start), "start was {start}");
}

#[test]
fn test_beginner_window_width() {
    let config = SelectionConfig::default();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let window = rank_window(&stats(1, 0, 1), &config, 16_000, &mut rng);
        assert!(window.start >= 370 && window.start < 420);
        assert_eq!(window.len(), 800);
    }
}

#[test]
fn test_xp_contribution_is_capped() {
    let config = SelectionConfig::default();
    let capped = window_start(&stats(1, 1_000_000, 0), &config);
    assert_eq!(capped, 300 + 50 + 500);
}

#[test]
fn test_window_clamped_to_pool() {
    let config = SelectionConfig::default();
    let window = clamp_window(1000, &config, 1200);
    assert_eq!(window.end, 1200);
    assert_eq!(window.start, 1000);
}

#[test]
fn test_short_tail_shifts_start_back() {
    let config = SelectionConfig::default();

    let window = clamp_window(1195, &config, 1200);
    assert_eq!(window.len(), 20);
    assert_eq!(window.end, 1200);

    // Start past the end of the pool
    let window = clamp_window(5000, &config, 1200);
    assert_eq!((window.start, window.end), (1180, 1200));
}

#[test]
fn test_window_always_has_minimum_candidates() {
    let config = SelectionConfig::default();
    let mut rng = StdRng::seed_from_u64(42);

    for pool_len in [25, 100, 400, 900, 16_000] {
        for level in [1, 5, 40] {
            let window = rank_window(&stats(level, level * 500, 30), &config, pool_len, &mut rng);
            assert!(window.len() >= 20, "pool {pool_len} level {level}: {window:?}");
            assert!(window.end <= pool_len);
        }
    }
}

#[test]
fn test_candidates_skip_seen_words() {
    let index = synthetic_index(2000);
    let config = SelectionConfig {
        jitter: 0,
        ..SelectionConfig::default()
    };
    let seen: HashSet<String> = (1..=100).map(|r| format!("w{r}")).collect();
    let mut rng = StdRng::seed_from_u64(1);

    let candidates = flashcard_candidates(&index, &seen, &stats(1, 0, 1), &config, &mut rng);

    assert_eq!(candidates.len(), 800);
    assert!(candidates.iter().all(|e| !seen.contains(&e.word)));
    // Position 370 of the unseen pool is rank 471
    assert_eq!(candidates[0].rank, 471);
}

#[test]
fn test_fallback_batch_is_contiguous() {
    let index = synthetic_index(500);
    let mut rng = StdRng::seed_from_u64(3);

    let batch = fallback_batch(&index, &HashSet::new(), 20, &mut rng);
    assert_eq!(batch.len(), 20);
    for pair in batch.windows(2) {
        assert_eq!(pair[1].rank, pair[0].rank + 1);
    }
}

#[test]
fn test_fallback_batch_small_pool() {
    let index = synthetic_index(6);
    let mut rng = StdRng::seed_from_u64(3);
    let batch = fallback_batch(&index, &HashSet::new(), 20, &mut rng);
    assert_eq!(batch.len(), 5);
}

#[test]
fn test_distractors_are_distinct_and_exclude_target() {
    let index = synthetic_index(50);
    let pool: Vec<_> = index.valid().collect();
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..20 {
        let distractors = pick_distractors(&pool, "w10", 3, &mut rng);
        assert_eq!(distractors.len(), 3);
        assert!(distractors.iter().all(|d| d.word != "w10"));

        let unique: HashSet<_> = distractors.iter().map(|d| &d.word).collect();
        assert_eq!(unique.len(), 3);
    }
}

#[test]
fn test_distractors_from_tiny_pool() {
    let index = synthetic_index(3);
    let pool: Vec<_> = index.valid().collect();
    let mut rng = StdRng::seed_from_u64(9);

    let distractors = pick_distractors(&pool, "w1", 3, &mut rng);
    assert_eq!(distractors.len(), 1);
    assert_eq!(distractors[0].word, "w2");
}

#[test]
fn test_options_contain_answer() {
    let index = synthetic_index(50);
    let pool: Vec<_> = index.valid().collect();
    let mut rng = StdRng::seed_from_u64(11);

    let distractors = pick_distractors(&pool, "w5", 3, &mut rng);
    let options = shuffled_options("w5", &distractors, &mut rng);

    assert_eq!(options.len(), 4);
    assert!(options.iter().any(|o| o == "w5"));
}

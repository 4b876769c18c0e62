use chrono::NaiveDate;
use lexi_core::stats::{StatsStore, StatsTracker};
use tempfile::TempDir;

use crate::persistence::JsonFileStore;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

#[test]
fn test_missing_file_loads_nothing() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("stats.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_tracker_state_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("coca_user_stats_v1.json");

    {
        let mut tracker = StatsTracker::open(JsonFileStore::new(&path), day(10));
        tracker.add_xp(30, day(10));
        tracker.add_words_learned(["Zephyr"]);
    }
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());

    let tracker = StatsTracker::open(JsonFileStore::new(&path), day(11));
    let stats = tracker.stats();
    assert_eq!(stats.xp, 30);
    assert_eq!(stats.streak, 2);
    assert!(stats.words_learned.contains("zephyr"));
    assert_eq!(
        stats
            .history
            .iter()
            .find(|r| r.full_date == day(10))
            .map(|r| r.xp),
        Some(30)
    );
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(JsonFileStore::new(&path).load().is_err());

    // The tracker starts fresh instead
    let tracker = StatsTracker::open(JsonFileStore::new(&path), day(1));
    assert_eq!(tracker.stats().xp, 0);
}

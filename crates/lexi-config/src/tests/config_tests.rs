use crate::Config;
use crate::grounding::GroundingConfig;
use crate::selection::SelectionConfig;
use crate::tutor::TutorConfig;

#[test]
fn test_partial_profile_fills_defaults() {
    let json = r#"{
        "selection": { "window_width": 400 },
        "grounding": { "max_words": 2 }
    }"#;

    let config: Config = serde_json::from_str(json).expect("config should parse");

    assert_eq!(config.selection.window_width, 400);
    assert_eq!(config.selection.base_rank, 300);
    assert_eq!(config.selection.min_candidates, 20);
    assert_eq!(config.grounding.max_words, 2);
    assert_eq!(config.grounding.common_rank_threshold, 200);
    assert_eq!(config.corpus_path, "data/coca.json");
    assert_eq!(config.channel_capacity, 64);
}

#[test]
fn test_selection_defaults_match_tuning() {
    let selection = SelectionConfig::default();
    assert_eq!(selection.per_level, 50);
    assert_eq!(selection.xp_divisor, 10);
    assert_eq!(selection.xp_cap, 500);
    assert_eq!(selection.per_streak_day, 20);
    assert_eq!(selection.jitter, 50);
    assert_eq!(selection.batch_size, 20);
}

#[test]
fn test_grounding_defaults() {
    let grounding = GroundingConfig::default();
    assert_eq!(grounding.short_query_tokens, 5);
    assert_eq!(grounding.max_blocks, 2);
    assert_eq!(grounding.examples_per_block, 1);
}

#[test]
fn test_tutor_needs_key_to_be_usable() {
    let mut tutor = TutorConfig {
        enabled: true,
        ..TutorConfig::default()
    };
    assert!(!tutor.is_usable());

    tutor.api_key = "secret".to_string();
    assert!(tutor.is_usable());
}

#[test]
fn test_storage_path_uses_key() {
    let config = Config::default();
    let path = config.stats.storage_path();
    assert!(path.ends_with("coca_user_stats_v1.json"));
}

#[test]
fn test_api_key_never_serialized() {
    let mut config = Config::default();
    config.tutor.api_key = "secret".to_string();

    let json = serde_json::to_string(&config).expect("config should serialize");
    assert!(!json.contains("secret"));

    let back: Config = serde_json::from_str(&json).expect("config should parse");
    assert!(back.tutor.api_key.is_empty());
}

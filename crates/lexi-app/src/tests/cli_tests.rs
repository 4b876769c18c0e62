use clap::Parser;
use lexi_config::Config;
use tempfile::TempDir;

use crate::cli::{Args, resolve_config};
use crate::profile::{add_profile_from_default, init_user_config, load_user_profile, profiles_dir};

fn env_config(data_dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.stats.data_dir = data_dir.path().display().to_string();
    config.tutor.api_key = "secret-key".to_string();
    config.tutor.enabled = true;
    config
}

#[test]
fn test_flags_override_config() {
    let args = Args::parse_from([
        "lexi",
        "--corpus",
        "words.tsv",
        "--content-url",
        "https://example.org",
        "--offline",
    ]);
    let dir = TempDir::new().unwrap();

    let config = resolve_config(&args, env_config(&dir)).unwrap();
    assert_eq!(config.corpus_path, "words.tsv");
    assert_eq!(config.content.base_url.as_deref(), Some("https://example.org"));
    assert!(!config.tutor.is_usable());
}

#[test]
fn test_profile_is_created_and_never_stores_key() {
    let dir = TempDir::new().unwrap();
    let defaults = env_config(&dir);

    init_user_config(dir.path(), &defaults).unwrap();
    let main = profiles_dir(dir.path()).join("main.json");
    let raw = std::fs::read_to_string(&main).unwrap();
    assert!(!raw.contains("secret-key"));

    let args = Args {
        profile: Some("main".to_string()),
        ..Default::default()
    };
    let config = resolve_config(&args, defaults).unwrap();
    assert_eq!(config.tutor.api_key, "secret-key");
}

#[test]
fn test_new_profile_clones_main_and_unknown_falls_back() {
    let dir = TempDir::new().unwrap();
    let mut defaults = env_config(&dir);
    defaults.selection.batch_size = 12;

    init_user_config(dir.path(), &defaults).unwrap();
    let path = add_profile_from_default(dir.path(), "exam", &Config::default()).unwrap();
    assert!(path.ends_with("exam.json"));

    let exam = load_user_profile(dir.path(), "exam", &Config::default()).unwrap();
    assert_eq!(exam.selection.batch_size, 12);

    let missing = load_user_profile(dir.path(), "nobody", &Config::default()).unwrap();
    assert_eq!(missing.selection.batch_size, 12);
}

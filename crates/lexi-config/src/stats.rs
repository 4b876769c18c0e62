use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_storage_key() -> String {
    "coca_user_stats_v1".to_string()
}

fn default_data_dir() -> String {
    ".lexi".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct StatsConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            data_dir: default_data_dir(),
        }
    }
}

impl StatsConfig {
    pub fn new() -> Self {
        let data_dir = env::var("LEXI_DATA_DIR").unwrap_or_else(|_| default_data_dir());

        Self {
            data_dir,
            ..Self::default()
        }
    }

    /// File backing the stats store
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(format!("{}.json", self.storage_key))
    }
}

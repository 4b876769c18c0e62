use std::fs;
use std::path::{Path, PathBuf};

use lexi_core::StoreError;
use lexi_core::stats::StatsStore;
use lexi_types::UserStats;

/// Stats kept as one JSON document on disk
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> Result<Option<UserStats>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let data = fs::read_to_string(&self.path)?;
        let stats = serde_json::from_str(&data)?;
        Ok(Some(stats))
    }

    fn save(&self, stats: &UserStats) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Atomic replace
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(stats)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use lexi_config::Config;
use serde::{Deserialize, Serialize};

pub const MAIN_PROFILE: &str = "main";

/// Profiles live next to the stats file
pub fn profiles_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("profiles")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&data)?;
    Ok(profile.value)
}

fn write_profile(path: &Path, name: &str, config: &Config) -> anyhow::Result<()> {
    let profile = Profile {
        name: name.into(),
        value: config.clone(),
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)?;
    Ok(())
}

/// Create the profiles folder and a main profile from `defaults` if missing
pub fn init_user_config(data_dir: &Path, defaults: &Config) -> anyhow::Result<()> {
    let dir = profiles_dir(data_dir);
    fs::create_dir_all(&dir)?;

    let main_profile = dir.join(format!("{MAIN_PROFILE}.json"));
    if !main_profile.exists() {
        write_profile(&main_profile, MAIN_PROFILE, defaults)?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(())
}

/// Load a user profile by name, falling back to main, then to `defaults`
pub fn load_user_profile(data_dir: &Path, name: &str, defaults: &Config) -> anyhow::Result<Config> {
    let dir = profiles_dir(data_dir);
    let profile_file = dir.join(format!("{name}.json"));

    if profile_file.exists() {
        return read_profile(&profile_file);
    }

    tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
    let main_file = dir.join(format!("{MAIN_PROFILE}.json"));
    if main_file.exists() {
        read_profile(&main_file)
    } else {
        Ok(defaults.clone())
    }
}

/// Add a new profile cloned from main (or `defaults` if main is missing)
pub fn add_profile_from_default(
    data_dir: &Path,
    new_name: &str,
    defaults: &Config,
) -> anyhow::Result<PathBuf> {
    let config = load_user_profile(data_dir, MAIN_PROFILE, defaults)?;
    let dir = profiles_dir(data_dir);
    fs::create_dir_all(&dir)?;

    let file = dir.join(format!("{new_name}.json"));
    write_profile(&file, new_name, &config)?;
    tracing::info!("Created new profile: {new_name}");
    Ok(file)
}

use std::path::PathBuf;

use clap::Parser;
use lexi_config::Config;

use crate::profile::{init_user_config, load_user_profile};

#[derive(Parser, Debug, Default)]
#[command(name = "lexi")]
#[command(about = "COCA vocabulary trainer with flashcards, quizzes and an AI tutor")]
pub struct Args {
    /// Profile to load from `<data-dir>/profiles`
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Create a profile cloned from main and exit
    #[arg(long)]
    pub new_profile: Option<String>,

    /// Corpus file (JSON array of {word, html} or word<TAB>html lines)
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Directory of dictionary pages
    #[arg(long)]
    pub content_dir: Option<String>,

    /// Base URL serving dictionary pages under /data/
    #[arg(long)]
    pub content_url: Option<String>,

    /// Where stats and profiles are stored
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Never call the AI tutor
    #[arg(long)]
    pub offline: bool,

    /// Log as JSON lines (also LEXI_LOG_JSON=1)
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    /// Command-line flags win over profile and environment
    pub fn apply(&self, config: &mut Config) {
        if let Some(corpus) = &self.corpus {
            config.corpus_path = corpus.display().to_string();
        }
        if let Some(dir) = &self.content_dir {
            config.content.content_dir = Some(dir.clone());
        }
        if let Some(url) = &self.content_url {
            config.content.base_url = Some(url.clone());
        }
        if let Some(dir) = &self.data_dir {
            config.stats.data_dir = dir.clone();
        }
        if self.offline {
            config.tutor.enabled = false;
        }
    }

    pub fn data_dir(&self, env_config: &Config) -> PathBuf {
        PathBuf::from(
            self.data_dir
                .clone()
                .unwrap_or_else(|| env_config.stats.data_dir.clone()),
        )
    }
}

/// Environment first, then the selected profile, then flags
pub fn resolve_config(args: &Args, env_config: Config) -> anyhow::Result<Config> {
    let mut config = match &args.profile {
        Some(name) => {
            let data_dir = args.data_dir(&env_config);
            init_user_config(&data_dir, &env_config)?;

            let mut config = load_user_profile(&data_dir, name, &env_config)?;
            // Profiles never carry the key
            config.tutor.api_key = env_config.tutor.api_key.clone();
            config
        }
        None => env_config,
    };

    args.apply(&mut config);
    Ok(config)
}

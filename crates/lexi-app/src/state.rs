use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use lexi_config::Config;
use lexi_core::stats::StatsTracker;
use lexi_core::{ContentSource, CorpusIndex};
use lexi_lang_english::{ContentResolver, CorpusLoader, source_from_config};
use lexi_tutor::{DisabledTutor, GeminiTutor, Tutor};
use lexi_types::{ChatTurn, QuizQuestion};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{Mutex, RwLock};

use crate::persistence::JsonFileStore;

/// Per-run learner state that is not persisted
#[derive(Debug, Default)]
pub struct Session {
    /// Words already shown this run, excluded from new flashcard rounds
    pub seen: HashSet<String>,
    /// Cards currently showing their back side
    pub flipped: HashSet<String>,
    pub current_quiz: Option<QuizQuestion>,
    pub chat_history: Vec<ChatTurn>,
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub index: Arc<CorpusIndex>,
    pub resolver: ContentResolver<Box<dyn ContentSource>>,
    pub tutor: Arc<dyn Tutor>,
    pub tracker: Mutex<StatsTracker<JsonFileStore>>,
    pub session: Mutex<Session>,
    pub rng: Mutex<StdRng>,
}

impl AppState {
    pub fn new(
        config: Config,
        index: Arc<CorpusIndex>,
        source: Box<dyn ContentSource>,
        tutor: Arc<dyn Tutor>,
        store: JsonFileStore,
    ) -> Self {
        let tracker = StatsTracker::open(store, today());

        Self {
            config: Arc::new(RwLock::new(config)),
            index,
            resolver: ContentResolver::new(source),
            tutor,
            tracker: Mutex::new(tracker),
            session: Mutex::new(Session::default()),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Wire everything the configuration describes
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let index = CorpusLoader::load_or_demo(Path::new(&config.corpus_path))
            .with_context(|| format!("loading corpus {}", config.corpus_path))?;
        tracing::info!("Corpus ready: {} words", index.valid().count());

        let source = source_from_config(&config.content);

        let tutor: Arc<dyn Tutor> = if config.tutor.is_usable() {
            tracing::info!("AI tutor enabled ({})", config.tutor.fast_model);
            Arc::new(GeminiTutor::new(&config.tutor).context("building tutor client")?)
        } else {
            tracing::warn!("AI tutor disabled, using local fallbacks");
            Arc::new(DisabledTutor)
        };

        let store = JsonFileStore::new(config.stats.storage_path());
        tracing::info!("Stats file: {}", store.path().display());

        Ok(Self::new(config, Arc::new(index), source, tutor, store))
    }
}

/// Calendar day used for streaks and XP buckets
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

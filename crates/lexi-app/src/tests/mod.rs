mod cli_tests;
mod persistence_tests;
mod sync_channel_tests;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kanal::AsyncReceiver;
use lexi_config::Config;
use lexi_core::{ContentSource, CorpusIndex, FetchError};
use lexi_core::content::NoSource;
use lexi_lang_english::CorpusLoader;
use lexi_tutor::{Tutor, TutorError, TutorRequest, TutorResponse};
use lexi_types::AppEvent;
use tempfile::TempDir;
use tokio::sync::Notify;

use crate::persistence::JsonFileStore;
use crate::state::AppState;

/// Tutor that replays queued replies in order and records every request
#[derive(Default)]
pub(crate) struct ScriptedTutor {
    replies: Mutex<VecDeque<Result<TutorResponse, TutorError>>>,
    requests: Mutex<Vec<TutorRequest>>,
}

impl ScriptedTutor {
    pub(crate) fn replying(replies: Vec<Result<TutorResponse, TutorError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<TutorRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Tutor for ScriptedTutor {
    async fn ask(&self, request: TutorRequest) -> Result<TutorResponse, TutorError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TutorError::ApiError("no scripted reply".to_string())))
    }
}

/// App state over `index` with no content source and stats in a temp dir
pub(crate) fn state_with(index: CorpusIndex, tutor: Arc<dyn Tutor>) -> (AppState, TempDir) {
    state_with_source(index, Box::new(NoSource), tutor)
}

pub(crate) fn state_with_source(
    index: CorpusIndex,
    source: Box<dyn ContentSource>,
    tutor: Arc<dyn Tutor>,
) -> (AppState, TempDir) {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.stats.data_dir = dir.path().display().to_string();

    let store = JsonFileStore::new(config.stats.storage_path());
    let state = AppState::new(config, Arc::new(index), source, tutor, store);
    (state, dir)
}

/// Source whose fetches park until the test releases them
#[derive(Clone, Default)]
pub(crate) struct GatedSource {
    pub(crate) entered: Arc<Notify>,
    pub(crate) release: Arc<Notify>,
}

#[async_trait]
impl ContentSource for GatedSource {
    async fn fetch(&self, html_ref: &str) -> Result<String, FetchError> {
        self.entered.notify_one();
        self.release.notified().await;
        Err(FetchError::NotFound(html_ref.to_string()))
    }

    fn name(&self) -> &str {
        "gated"
    }
}

pub(crate) fn demo_state(tutor: Arc<dyn Tutor>) -> (AppState, TempDir) {
    state_with(CorpusLoader::demo(), tutor)
}

pub(crate) fn next_event(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    rx.try_recv()
        .expect("channel closed")
        .expect("no event was sent")
}

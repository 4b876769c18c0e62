mod markup_tests;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lexi_core::{ContentSource, CorpusIndex, FetchError};

/// In-memory pages; anything else is a miss, or a network failure when `offline`
#[derive(Default)]
pub(crate) struct MapSource {
    pages: HashMap<String, String>,
    offline: bool,
    calls: AtomicUsize,
}

impl MapSource {
    pub(crate) fn with_page(mut self, html_ref: &str, html: &str) -> Self {
        self.pages.insert(html_ref.to_string(), html.to_string());
        self
    }

    pub(crate) fn offline() -> Self {
        Self {
            offline: true,
            ..Default::default()
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentSource for MapSource {
    async fn fetch(&self, html_ref: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            return Err(FetchError::Network("connection refused".to_string()));
        }
        self.pages
            .get(html_ref)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(html_ref.to_string()))
    }

    fn name(&self) -> &str {
        "map"
    }
}

pub(crate) fn page_ref(rank: usize, word: &str) -> String {
    format!("coca_{:05}_{}.html", rank, word)
}

/// 300 words: filler around a few common words near the top and a few
/// rarer ones past rank 200
pub(crate) fn grounding_index() -> CorpusIndex {
    let named = |rank: usize| match rank {
        1 => Some("the"),
        2 => Some("of"),
        3 => Some("and"),
        4 => Some("a"),
        5 => Some("be"),
        250 => Some("zephyr"),
        260 => Some("quixotic"),
        270 => Some("ephemeral"),
        280 => Some("serendipity"),
        _ => None,
    };

    CorpusIndex::from_pairs((0..300).map(|rank| {
        if rank == 0 {
            return (String::new(), String::new());
        }
        let word = named(rank)
            .map(str::to_string)
            .unwrap_or_else(|| format!("filler{rank}"));
        let html_ref = page_ref(rank, &word);
        (word, html_ref)
    }))
}

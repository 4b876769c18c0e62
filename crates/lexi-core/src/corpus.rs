use std::collections::{HashMap, HashSet};

use lexi_types::CorpusEntry;

/// Maximum number of rows returned by [`CorpusIndex::search`]
pub const SEARCH_LIMIT: usize = 100;

/// Read-only view over the frequency corpus.
///
/// Built once at startup and shared by reference; nothing mutates it afterwards.
pub struct CorpusIndex {
    entries: Vec<CorpusEntry>,
    word_index: HashMap<String, usize>,
}

impl CorpusIndex {
    /// Build the index. The entry at rank 0 is a sentinel and is never indexed.
    pub fn new(entries: Vec<CorpusEntry>) -> Self {
        let mut word_index = HashMap::with_capacity(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            if entry.rank == 0 || entry.word.is_empty() {
                continue;
            }
            // Keep the most frequent spelling when a word is listed twice
            word_index.entry(entry.word.to_lowercase()).or_insert(idx);
        }

        Self {
            entries,
            word_index,
        }
    }

    /// Build from `(word, html_ref)` pairs, rank being the position in the list
    pub fn from_pairs<I, W, H>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (W, H)>,
        W: Into<String>,
        H: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .enumerate()
            .map(|(rank, (word, html_ref))| CorpusEntry {
                word: word.into(),
                html_ref: html_ref.into(),
                rank,
            })
            .collect();

        Self::new(entries)
    }

    /// Number of records, sentinel included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, rank: usize) -> Option<&CorpusEntry> {
        self.entries.get(rank)
    }

    /// Exact, case-insensitive word lookup
    pub fn lookup(&self, word: &str) -> Option<&CorpusEntry> {
        self.word_index
            .get(&word.to_lowercase())
            .and_then(|&idx| self.entries.get(idx))
    }

    /// Rank of `word`, `None` if it is not in the corpus
    pub fn rank_of(&self, word: &str) -> Option<usize> {
        self.lookup(word).map(|entry| entry.rank)
    }

    /// Browsable entries in corpus order: no sentinel, no blank records
    pub fn valid(&self) -> impl Iterator<Item = &CorpusEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.rank > 0 && entry.is_valid())
    }

    /// Entries whose word starts with `prefix`, case-insensitive, corpus order
    pub fn by_prefix(&self, prefix: &str) -> Vec<&CorpusEntry> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }

        self.valid()
            .filter(|entry| entry.word.to_lowercase().starts_with(&prefix))
            .collect()
    }

    /// Substring search. Prefix matches come first; within each group
    /// corpus order is kept. At most [`SEARCH_LIMIT`] rows.
    pub fn search(&self, query: &str) -> Vec<&CorpusEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(bool, &CorpusEntry)> = self
            .valid()
            .filter_map(|entry| {
                let word = entry.word.to_lowercase();
                word.contains(&query)
                    .then(|| (!word.starts_with(&query), entry))
            })
            .collect();

        // Stable: equal keys keep corpus order
        matches.sort_by_key(|(contains_only, _)| *contains_only);

        matches
            .into_iter()
            .take(SEARCH_LIMIT)
            .map(|(_, entry)| entry)
            .collect()
    }

    /// Valid entries whose word is not in `seen`, corpus order
    pub fn unseen(&self, seen: &HashSet<String>) -> Vec<&CorpusEntry> {
        self.valid()
            .filter(|entry| !seen.contains(&entry.word))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyBand {
    VeryCommon,
    Common,
    Uncommon,
    Rare,
    Unknown,
}

impl FrequencyBand {
    pub fn from_rank(rank: usize) -> Self {
        match rank {
            0 => FrequencyBand::Unknown,
            1..=1000 => FrequencyBand::VeryCommon,
            1001..=5000 => FrequencyBand::Common,
            5001..=10000 => FrequencyBand::Uncommon,
            _ => FrequencyBand::Rare,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyBand::VeryCommon => "Very Common",
            FrequencyBand::Common => "Common",
            FrequencyBand::Uncommon => "Uncommon",
            FrequencyBand::Rare => "Rare",
            FrequencyBand::Unknown => "Unknown",
        }
    }

    pub fn stars(&self) -> &'static str {
        match self {
            FrequencyBand::VeryCommon => "★★★★★",
            FrequencyBand::Common => "★★★★",
            FrequencyBand::Uncommon => "★★★",
            FrequencyBand::Rare => "★★",
            FrequencyBand::Unknown => "",
        }
    }
}

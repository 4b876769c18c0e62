use std::path::Path;

use lexi_core::{CorpusIndex, LoadError};
use serde::Deserialize;

use crate::samples;

/// One record of the JSON corpus export
#[derive(Debug, Deserialize)]
struct CorpusRecord {
    #[serde(default)]
    word: String,
    #[serde(default)]
    html: String,
}

pub struct CorpusLoader;

impl CorpusLoader {
    /// Load the corpus; the position of a record in the file is its rank
    pub fn load_from_file(path: &Path) -> Result<CorpusIndex, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading corpus from file: {}", path.display());
        let content = std::fs::read_to_string(path)?;

        let is_tsv = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("tsv"))
            .unwrap_or(false);

        let index = if is_tsv || !content.trim_start().starts_with('[') {
            Self::from_tsv(&content)?
        } else {
            Self::from_json(&content)?
        };

        tracing::info!("Loaded {} corpus records", index.len());
        Ok(index)
    }

    /// JSON array of `{word, html}` objects
    pub fn from_json(json: &str) -> Result<CorpusIndex, LoadError> {
        let records: Vec<CorpusRecord> = serde_json::from_str(json)?;
        Ok(CorpusIndex::from_pairs(
            records.into_iter().map(|r| (r.word, r.html)),
        ))
    }

    /// `word<TAB>html_ref` per line
    pub fn from_tsv(content: &str) -> Result<CorpusIndex, LoadError> {
        let mut pairs = Vec::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let Some((word, html)) = line.split_once('\t') else {
                if line.trim().is_empty() {
                    pairs.push((String::new(), String::new()));
                    continue;
                }
                return Err(LoadError::InvalidFormat(format!(
                    "line {}: expected word<TAB>reference",
                    line_no + 1
                )));
            };
            pairs.push((word.trim().to_string(), html.trim().to_string()));
        }

        Ok(CorpusIndex::from_pairs(pairs))
    }

    /// Tiny corpus built around the bundled pages, used when no corpus file exists
    pub fn demo() -> CorpusIndex {
        let mut pairs = vec![
            (String::new(), String::new()),
            ("the".to_string(), "coca_00001_the.html".to_string()),
        ];
        pairs.extend(samples::all().iter().map(|(html_ref, _)| {
            (
                crate::resolver::word_from_ref(html_ref),
                html_ref.to_string(),
            )
        }));

        CorpusIndex::from_pairs(pairs)
    }

    /// Load `path`, falling back to [`CorpusLoader::demo`] when it is missing
    pub fn load_or_demo(path: &Path) -> Result<CorpusIndex, LoadError> {
        match Self::load_from_file(path) {
            Err(LoadError::FileNotFound(p)) => {
                tracing::warn!("Corpus file {} not found, using the demo corpus", p);
                Ok(Self::demo())
            }
            other => other,
        }
    }
}

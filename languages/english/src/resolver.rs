use std::sync::LazyLock;

use lexi_core::{ContentSource, FetchError};
use lexi_types::{CorpusEntry, ParsedWordEntry};
use regex::Regex;

use crate::parser;
use crate::samples;

static REF_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"coca_\d+_(.+)\.html").expect("valid reference regex"));

static REF_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"coca_\d+_").expect("valid reference prefix regex"));

/// Turns a content reference into markup, always.
///
/// Bundled samples are served first, then the configured source; anything
/// the source cannot deliver is replaced by a generated placeholder page.
pub struct ContentResolver<S: ContentSource> {
    source: S,
}

impl<S: ContentSource> ContentResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn resolve(&self, html_ref: &str) -> String {
        if let Some(html) = samples::sample(html_ref) {
            return html.to_string();
        }

        match self.source.fetch(html_ref).await {
            Ok(html) => html,
            Err(FetchError::NotFound(_)) => {
                tracing::warn!("{} not found, using placeholder content", html_ref);
                fallback_markup(html_ref)
            }
            Err(e) => {
                tracing::warn!(
                    "Could not load {} from {}: {}, using placeholder",
                    html_ref,
                    self.source.name(),
                    e
                );
                fallback_markup(html_ref)
            }
        }
    }

    /// Resolve and parse the page of a corpus record
    pub async fn resolve_entry(&self, entry: &CorpusEntry) -> ParsedWordEntry {
        let html = self.resolve(&entry.html_ref).await;
        parser::parse(&html, &entry.word)
    }
}

/// Word segment of a `coca_<number>_<word>.html` reference
pub fn word_from_ref(html_ref: &str) -> String {
    match REF_WORD.captures(html_ref).and_then(|c| c.get(1)) {
        Some(word) => word.as_str().to_string(),
        None => REF_PREFIX
            .replace(&html_ref.replacen(".html", "", 1), "")
            .into_owned(),
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Deterministic stand-in page for a reference nothing could deliver
pub fn fallback_markup(html_ref: &str) -> String {
    let word = word_from_ref(html_ref);
    let title = title_case(&word);
    let audio = html_ref.replacen(".html", ".mp3", 1);

    format!(
        "<pre style='word-break: break-word;white-space: normal;background-color: floralwhite;text-align:left;padding:40px;'>\n\
<meta charset='UTF-8'>\n\
<span class='word-audio audio' data-src='{audio}'></span>\n\
{word} <div style=''>[/{word}/]</div> <div style=''>n./v. {title} (Demo Definition)</div> \"<div><br /><div style='color:RosyBrown'>DEMO</div><div style='color:OrangeRed'>Auto-generated content</div><div style=\"\"font-weight:bold;\"\">The detailed dictionary entry for '{word}' is not available in this offline demo.</div><div style=''><b>Example:</b> This is a placeholder example sentence for {word}.</div></div>\"\n\
</pre>"
    )
}

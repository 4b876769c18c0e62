use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use lexi_config::content::ContentConfig;
use lexi_core::{ContentSource, FetchError};
use lexi_core::content::NoSource;

/// Fetches pages from `{base_url}/data/{html_ref}`
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, html_ref: &str) -> String {
        format!("{}/data/{}", self.base_url, html_ref)
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, html_ref: &str) -> Result<String, FetchError> {
        let url = self.url_for(html_ref);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.clone())
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        if response.status() == 404 {
            return Err(FetchError::NotFound(html_ref.to_string()));
        }

        if !response.status().is_success() {
            return Err(FetchError::Network(format!("HTTP {}", response.status())));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url)
            } else {
                FetchError::Network(e.to_string())
            }
        })
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Reads pages from a local directory of `coca_*.html` files
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// A reference must name a single file inside the content directory
fn is_plain_ref(html_ref: &str) -> bool {
    !html_ref.is_empty()
        && !html_ref.contains(['/', '\\'])
        && !html_ref.contains("..")
}

#[async_trait]
impl ContentSource for DirSource {
    async fn fetch(&self, html_ref: &str) -> Result<String, FetchError> {
        if !is_plain_ref(html_ref) {
            return Err(FetchError::NotFound(html_ref.to_string()));
        }

        match tokio::fs::read_to_string(self.root.join(html_ref)).await {
            Ok(html) => Ok(html),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(FetchError::NotFound(html_ref.to_string()))
            }
            Err(e) => Err(FetchError::Io(e)),
        }
    }

    fn name(&self) -> &str {
        "dir"
    }
}

/// Pick the content source the configuration asks for.
///
/// A local directory wins over a remote base URL; with neither, every fetch
/// misses and pages come from the bundled samples or the placeholder.
pub fn source_from_config(config: &ContentConfig) -> Box<dyn ContentSource> {
    if let Some(dir) = config.content_dir.as_deref().filter(|d| !d.is_empty()) {
        tracing::info!("Reading dictionary pages from {}", dir);
        return Box::new(DirSource::new(dir));
    }

    if let Some(base_url) = config.base_url.as_deref().filter(|u| !u.is_empty()) {
        let timeout = Duration::from_millis(config.fetch_timeout_ms);
        match HttpSource::new(base_url, timeout) {
            Ok(source) => {
                tracing::info!("Fetching dictionary pages from {}", base_url);
                return Box::new(source);
            }
            Err(e) => tracing::warn!("Failed to build HTTP content source: {}", e),
        }
    }

    tracing::info!("No content source configured, using bundled pages only");
    Box::new(NoSource)
}

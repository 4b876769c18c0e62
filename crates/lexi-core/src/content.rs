use async_trait::async_trait;

use crate::error::FetchError;

/// Byte/text fetch keyed on a content reference id
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the raw markup for `html_ref`.
    ///
    /// A missing page must be reported as [`FetchError::NotFound`].
    async fn fetch(&self, html_ref: &str) -> Result<String, FetchError>;

    /// Short name used in logs
    fn name(&self) -> &str;
}

/// Source that has nothing; every lookup is a miss
pub struct NoSource;

#[async_trait]
impl ContentSource for NoSource {
    async fn fetch(&self, html_ref: &str) -> Result<String, FetchError> {
        Err(FetchError::NotFound(html_ref.to_string()))
    }

    fn name(&self) -> &str {
        "none"
    }
}

#[async_trait]
impl<S: ContentSource + ?Sized> ContentSource for Box<S> {
    async fn fetch(&self, html_ref: &str) -> Result<String, FetchError> {
        (**self).fetch(html_ref).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

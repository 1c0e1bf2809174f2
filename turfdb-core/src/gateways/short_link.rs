use async_trait::async_trait;
use thiserror::Error;

/// Any failure while following the redirects of a link.
///
/// Network errors, timeouts, malformed URLs and unsuccessful
/// responses are all reported as this single kind.
#[derive(Debug, Error)]
#[error("Unable to resolve '{url}': {reason}")]
pub struct ResolutionFailed {
    pub url: String,
    pub reason: String,
}

impl ResolutionFailed {
    pub fn new(url: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
pub trait ShortLinkGateway: Send + Sync {
    /// Follow the redirect chain of `url` and return the final URL.
    ///
    /// Links that do not redirect are returned unchanged.
    async fn resolve_short_url(&self, url: &str) -> Result<String, ResolutionFailed>;
}

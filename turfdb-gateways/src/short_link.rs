use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{redirect, Client, Url};
use turfdb_core::gateways::short_link::{ResolutionFailed, ShortLinkGateway};

#[derive(Debug, Clone)]
pub struct ShortLinkResolverConfig {
    /// Applies to the whole request including all redirects.
    pub timeout: Duration,
    pub max_redirects: usize,
}

impl Default for ShortLinkResolverConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            max_redirects: 10,
        }
    }
}

/// Resolves shortened map links by following their HTTP redirects.
#[derive(Debug, Clone)]
pub struct ShortLinkResolver {
    client: Client,
}

impl ShortLinkResolver {
    pub fn try_new(config: &ShortLinkResolverConfig) -> Result<Self> {
        let ShortLinkResolverConfig {
            timeout,
            max_redirects,
        } = config;
        let client = Client::builder()
            .redirect(redirect::Policy::limited(*max_redirects))
            .timeout(*timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ShortLinkGateway for ShortLinkResolver {
    async fn resolve_short_url(&self, url: &str) -> Result<String, ResolutionFailed> {
        let request_url = Url::parse(url.trim()).map_err(|err| ResolutionFailed::new(url, err))?;
        let response = self
            .client
            .get(request_url.clone())
            .send()
            .await
            .map_err(|err| ResolutionFailed::new(url, err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResolutionFailed::new(url, format!("HTTP status {status}")));
        }
        if *response.url() == request_url {
            log::debug!("No redirect for '{url}'");
            return Ok(url.to_owned());
        }
        let final_url = response.url().to_string();
        log::debug!("Resolved '{url}' to '{final_url}'");
        Ok(final_url)
    }
}

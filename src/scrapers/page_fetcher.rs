use crate::error::{AnalyzerError, Result};
use scraper::Html;
use std::time::Duration;

const FOREBET_URL: &str = "https://www.forebet.com";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Settings for fetching match pages
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Every match URL has to start with this
    pub trusted_prefix: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            trusted_prefix: FOREBET_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }
}

pub struct PageFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        Self::with_config(FetchConfig::default())
    }

    pub fn with_config(config: FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(AnalyzerError::ClientBuild)?;

        Ok(Self { client, config })
    }

    /// Reject URLs outside the trusted site before any request is made
    pub fn check_url(&self, url: &str) -> Result<()> {
        check_trusted_url(url, &self.config.trusted_prefix)
    }

    /// Fetch the raw HTML of a match page.
    /// Transport errors, timeouts and non-success statuses all surface as `AnalyzerError::Fetch`.
    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        self.check_url(url)?;

        let html = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        tracing::info!("Fetched {} ({} bytes)", url, html.len());
        Ok(html)
    }

    /// Fetch and parse a match page
    pub async fn fetch_document(&self, url: &str) -> Result<Html> {
        let html = self.fetch_html(url).await?;
        Ok(Html::parse_document(&html))
    }
}

/// Check that `url` belongs to the trusted site
pub fn check_trusted_url(url: &str, trusted_prefix: &str) -> Result<()> {
    if url.trim().starts_with(trusted_prefix) {
        Ok(())
    } else {
        Err(AnalyzerError::UntrustedUrl {
            url: url.to_string(),
            expected: trusted_prefix.to_string(),
        })
    }
}

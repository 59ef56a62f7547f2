use crate::domain::ports::PageFetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 7;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// reqwest-backed [`PageFetcher`]. Redirects are followed; anything other
/// than a 2xx body comes back as `None`.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(timeout_seconds: u64, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT)
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Failed to fetch {}: {}", url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("Non-success status {} for {}", response.status(), url);
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::debug!("Failed to read body of {}: {}", url, e);
                None
            }
        }
    }
}

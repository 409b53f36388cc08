use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::time::sleep;

/// HTTP client that spaces requests out to stay polite to the feed host
pub struct RateLimitedClient {
    client: Client,
    delay: Duration,
    requests_sent: usize,
}

impl RateLimitedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, rate_limit_ms: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            delay: Duration::from_millis(rate_limit_ms),
            requests_sent: 0,
        })
    }

    pub async fn get(&mut self, url: &str) -> Result<reqwest::Response> {
        // No delay ahead of the first request, a fixed spacing before every
        // request after that.
        if self.requests_sent > 0 {
            sleep(self.delay).await;
        }
        self.requests_sent += 1;

        self.client
            .get(url)
            .send()
            .await
            .context("Failed to send GET request")
    }
}

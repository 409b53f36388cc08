use anyhow::Result;
use log::{info, warn};

use crate::cache::FeedCache;
use crate::config::leagues::LeagueConfig;
use crate::config::settings::FeedSettings;
use crate::domain::MatchRecord;
use crate::errors::PredictionError;
use crate::http::RateLimitedClient;

use super::csv::parse_matches;

/// Downloads and decodes the historical results feed
pub struct FeedClient {
    client: RateLimitedClient,
    cache: FeedCache,
    settings: FeedSettings,
}

impl FeedClient {
    pub fn new(settings: FeedSettings, cache: FeedCache) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;

        Ok(Self {
            client,
            cache,
            settings,
        })
    }

    /// Load the full match history for a league.
    ///
    /// A cached download younger than the configured window is served
    /// without a network hit unless `force_refresh` is set; the staleness
    /// policy lives here, not in the model store. Any fetch or decode
    /// failure surfaces as `DataUnavailable`.
    pub async fn load_matches(
        &mut self,
        league: &LeagueConfig,
        force_refresh: bool,
    ) -> Result<Vec<MatchRecord>, PredictionError> {
        let body = self
            .load_body(league, force_refresh)
            .await
            .map_err(|e| PredictionError::DataUnavailable(format!("{e:#}")))?;

        let matches =
            parse_matches(&body).map_err(|e| PredictionError::DataUnavailable(format!("{e:#}")))?;

        info!("Loaded {} matches for league {}", matches.len(), league.code);
        Ok(matches)
    }

    async fn load_body(&mut self, league: &LeagueConfig, force_refresh: bool) -> Result<String> {
        if !force_refresh {
            if let Some(cached) = self
                .cache
                .load_fresh(league.code, self.settings.cache_max_age_secs)?
            {
                info!(
                    "Using cached results feed for {} (fetched {})",
                    league.code, cached.fetched_at
                );
                return Ok(cached.body);
            }
        }

        let url = self.results_url(league);
        info!("Fetching results feed for {} from {}", league.code, url);

        let response = self.client.get(&url).await?;
        if !response.status().is_success() {
            anyhow::bail!("feed returned status {}", response.status());
        }
        let body = response.text().await?;

        // A cache write failure costs a refetch later, nothing more.
        if let Err(e) = self.cache.save(league.code, &body) {
            warn!("Failed to cache results feed for {}: {:?}", league.code, e);
        }

        Ok(body)
    }

    fn results_url(&self, league: &LeagueConfig) -> String {
        format!(
            "{}/mmz4281/{}/{}.csv",
            self.settings.base_url, self.settings.season, league.code
        )
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

/// One cached feed download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedFeed {
    pub body: String,
    pub fetched_at: DateTime<Utc>,
}

impl CachedFeed {
    pub fn age_secs(&self, now: DateTime<Utc>) -> i64 {
        now.signed_duration_since(self.fetched_at).num_seconds()
    }
}

/// File-based cache of raw feed downloads, one JSON entry per league
pub struct FeedCache {
    cache_dir: PathBuf,
}

impl FeedCache {
    /// Create a new cache instance
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        fs::create_dir_all(&cache_dir).context("Failed to create feed cache directory")?;
        Ok(Self { cache_dir })
    }

    /// Cache rooted at $FEED_CACHE_DIR, falling back to ./cache
    pub fn from_env() -> Result<Self> {
        let dir = std::env::var("FEED_CACHE_DIR").unwrap_or_else(|_| "cache".to_string());
        Self::new(dir)
    }

    /// Save a downloaded feed body, stamped with the current time
    pub fn save(&self, league_code: &str, body: &str) -> Result<()> {
        let entry = CachedFeed {
            body: body.to_string(),
            fetched_at: Utc::now(),
        };
        let file_path = self.entry_path(league_code);
        let json = serde_json::to_string(&entry).context("Failed to serialize cache entry")?;
        fs::write(&file_path, json).context("Failed to write cache file")?;
        info!("Saved feed download to cache: {}", file_path.display());
        Ok(())
    }

    /// Load a cached feed body regardless of its age
    pub fn load(&self, league_code: &str) -> Result<Option<CachedFeed>> {
        let file_path = self.entry_path(league_code);
        if !file_path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&file_path).context("Failed to read cache file")?;
        let entry = serde_json::from_str(&json).context("Failed to deserialize cache entry")?;
        Ok(Some(entry))
    }

    /// Load a cached feed body only if it is younger than `max_age_secs`
    pub fn load_fresh(&self, league_code: &str, max_age_secs: i64) -> Result<Option<CachedFeed>> {
        let Some(entry) = self.load(league_code)? else {
            return Ok(None);
        };
        if entry.age_secs(Utc::now()) >= max_age_secs {
            return Ok(None);
        }
        Ok(Some(entry))
    }

    fn entry_path(&self, league_code: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", league_code))
    }
}

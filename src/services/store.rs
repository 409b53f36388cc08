use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::info;
use tokio::sync::Mutex;

use crate::config::leagues::{LeagueConfig, find_league};
use crate::config::settings::AppConfig;
use crate::errors::PredictionError;
use crate::feed::FeedClient;
use crate::rating::{self, LeagueModel};
use crate::simulation::{self, PredictionResult};

/// Keyed store of fitted league models.
///
/// Single owner of model state. A rebuild fits a whole new model and swaps
/// the `Arc` in under a short write lock, so concurrent readers observe
/// either the fully-old or the fully-new model, never a mix.
pub struct ModelStore {
    config: AppConfig,
    feed: Mutex<FeedClient>,
    models: RwLock<HashMap<String, Arc<LeagueModel>>>,
}

impl ModelStore {
    pub fn new(config: AppConfig, feed: FeedClient) -> Self {
        Self {
            config,
            feed: Mutex::new(feed),
            models: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Return the model for a league, building it on first use or when a
    /// reload is forced.
    pub async fn build_or_get(
        &self,
        league_code: &str,
        force_reload: bool,
    ) -> Result<Arc<LeagueModel>, PredictionError> {
        let league = self.resolve_league(league_code)?;

        if !force_reload {
            if let Some(model) = self.lookup(league.code) {
                return Ok(model);
            }
        }

        self.rebuild(league, force_reload).await
    }

    /// Fit a fresh model from the feed and atomically replace the cached one
    pub async fn rebuild(
        &self,
        league: &LeagueConfig,
        force_refresh: bool,
    ) -> Result<Arc<LeagueModel>, PredictionError> {
        let matches = {
            let mut feed = self.feed.lock().await;
            feed.load_matches(league, force_refresh).await?
        };

        let model = rating::fit_league_model(&matches, &self.config.model)?;
        info!(
            "Model for {} ready: {} teams from {} matches",
            league.code,
            model.ratings.len(),
            model.match_count
        );
        Ok(self.replace(league.code, model))
    }

    /// Atomic whole-model replacement. Also the seam tests use to install
    /// fixture models without touching the network.
    pub fn replace(&self, league_code: &str, model: LeagueModel) -> Arc<LeagueModel> {
        let model = Arc::new(model);
        let mut models = self.models.write().expect("model store lock poisoned");
        models.insert(league_code.to_string(), Arc::clone(&model));
        model
    }

    /// Predict the outcome distribution of a single fixture
    pub async fn predict(
        &self,
        league_code: &str,
        home_team: &str,
        away_team: &str,
    ) -> Result<PredictionResult, PredictionError> {
        let home_team = home_team.trim();
        let away_team = away_team.trim();
        if home_team.is_empty() {
            return Err(PredictionError::MissingInput("home team"));
        }
        if away_team.is_empty() {
            return Err(PredictionError::MissingInput("away team"));
        }

        let model = self.build_or_get(league_code, false).await?;
        simulation::simulate(&model, home_team, away_team, self.config.model.simulations)
    }

    /// Sorted team list for a league, building the model on first use
    pub async fn teams(&self, league_code: &str) -> Result<Vec<String>, PredictionError> {
        let model = self.build_or_get(league_code, false).await?;
        Ok(model.team_names())
    }

    fn resolve_league(&self, code: &str) -> Result<&'static LeagueConfig, PredictionError> {
        find_league(code).ok_or_else(|| PredictionError::InvalidLeague(code.trim().to_string()))
    }

    fn lookup(&self, league_code: &str) -> Option<Arc<LeagueModel>> {
        let models = self.models.read().expect("model store lock poisoned");
        models.get(league_code).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::FeedCache;
    use crate::config::settings::ModelSettings;
    use crate::domain::MatchRecord;

    fn test_store() -> ModelStore {
        let config = AppConfig::default();
        let cache_dir = tempfile::tempdir().unwrap();
        let cache = FeedCache::new(cache_dir.path()).unwrap();
        let feed = FeedClient::new(config.feed.clone(), cache).unwrap();
        ModelStore::new(config, feed)
    }

    fn fixture_model(matches: &[(&str, &str, u32, u32)]) -> LeagueModel {
        let records: Vec<MatchRecord> = matches
            .iter()
            .enumerate()
            .map(|(idx, (home, away, hg, ag))| MatchRecord {
                home_team: home.to_string(),
                away_team: away.to_string(),
                home_goals: *hg,
                away_goals: *ag,
                sequence_index: idx,
            })
            .collect();
        rating::fit_league_model(&records, &ModelSettings::default()).unwrap()
    }

    #[tokio::test]
    async fn unknown_league_is_rejected() {
        let store = test_store();
        let err = store.predict("ZZ3", "Lille", "Brest").await.unwrap_err();
        assert!(matches!(err, PredictionError::InvalidLeague(_)));
    }

    #[tokio::test]
    async fn blank_team_names_are_missing_input() {
        let store = test_store();
        let err = store.predict("F1", "  ", "Brest").await.unwrap_err();
        assert!(matches!(err, PredictionError::MissingInput("home team")));

        let err = store.predict("F1", "Lille", "").await.unwrap_err();
        assert!(matches!(err, PredictionError::MissingInput("away team")));
    }

    #[tokio::test]
    async fn predict_uses_the_installed_model() {
        let store = test_store();
        store.replace(
            "F1",
            fixture_model(&[
                ("Lille", "Brest", 2, 1),
                ("Brest", "Lille", 0, 3),
                ("Lille", "Lyon", 1, 1),
                ("Lyon", "Brest", 2, 2),
            ]),
        );

        let result = store.predict("F1", "Lille", "Brest").await.unwrap();
        let sum = result.prob_home_win + result.prob_draw + result.prob_away_win;
        assert!((sum - 100.0).abs() <= 0.15 + 1e-9);
    }

    #[tokio::test]
    async fn identical_teams_error_passes_through() {
        let store = test_store();
        store.replace("F1", fixture_model(&[("Lille", "Brest", 2, 1)]));

        let err = store.predict("F1", "Lille", "Lille").await.unwrap_err();
        assert!(matches!(err, PredictionError::IdenticalTeams));
    }

    #[tokio::test]
    async fn replace_swaps_the_whole_model() {
        let store = test_store();
        store.replace("F1", fixture_model(&[("Lille", "Brest", 2, 1)]));
        store.replace(
            "F1",
            fixture_model(&[("Lille", "Brest", 2, 1), ("Brest", "Lille", 1, 0)]),
        );

        let model = store.build_or_get("F1", false).await.unwrap();
        assert_eq!(model.match_count, 2);
    }

    #[tokio::test]
    async fn team_listing_is_sorted() {
        let store = test_store();
        store.replace(
            "F1",
            fixture_model(&[("Lyon", "Brest", 1, 0), ("Lille", "Lyon", 2, 2)]),
        );

        let teams = store.teams("F1").await.unwrap();
        assert_eq!(teams, vec!["Brest", "Lille", "Lyon"]);
    }
}

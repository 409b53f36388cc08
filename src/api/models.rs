use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::leagues::LeagueConfig;
use crate::rating::{LeagueModel, TeamRating};
use crate::simulation::PredictionResult;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    /// Defaults to the configured league when omitted.
    pub league: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub league: String,
    pub home_team: String,
    pub away_team: String,
    pub expected_home_goals: f64,
    pub expected_away_goals: f64,
    pub prob_home_win: f64,
    pub prob_draw: f64,
    pub prob_away_win: f64,
    // JSON has no infinity literal; a zero-probability outcome reports its
    // fair odds as null.
    pub fair_odds_home: Option<f64>,
    pub fair_odds_draw: Option<f64>,
    pub fair_odds_away: Option<f64>,
}

impl PredictionResponse {
    pub fn from_result(
        league: &str,
        home_team: &str,
        away_team: &str,
        result: &PredictionResult,
    ) -> Self {
        Self {
            league: league.to_string(),
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            expected_home_goals: result.expected_home_goals,
            expected_away_goals: result.expected_away_goals,
            prob_home_win: result.prob_home_win,
            prob_draw: result.prob_draw,
            prob_away_win: result.prob_away_win,
            fair_odds_home: finite_or_none(result.fair_odds_home),
            fair_odds_draw: finite_or_none(result.fair_odds_draw),
            fair_odds_away: finite_or_none(result.fair_odds_away),
        }
    }
}

fn finite_or_none(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueListItem {
    pub code: &'static str,
    pub name: &'static str,
    pub country: &'static str,
}

impl From<&LeagueConfig> for LeagueListItem {
    fn from(league: &LeagueConfig) -> Self {
        Self {
            code: league.code,
            name: league.name,
            country: league.country,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamListResponse {
    pub league: String,
    pub teams: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRatingRow {
    pub team: String,
    pub home_attack: f64,
    pub home_defense: f64,
    pub away_attack: f64,
    pub away_defense: f64,
    pub attack_strength_home: f64,
    pub attack_strength_away: f64,
    pub defense_weakness_home: f64,
    pub defense_weakness_away: f64,
}

impl TeamRatingRow {
    fn new(team: &str, rating: &TeamRating) -> Self {
        Self {
            team: team.to_string(),
            home_attack: rating.home_attack,
            home_defense: rating.home_defense,
            away_attack: rating.away_attack,
            away_defense: rating.away_defense,
            attack_strength_home: rating.attack_strength_home,
            attack_strength_away: rating.attack_strength_away,
            defense_weakness_home: rating.defense_weakness_home,
            defense_weakness_away: rating.defense_weakness_away,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingsResponse {
    pub league: String,
    pub avg_home_goals: f64,
    pub avg_away_goals: f64,
    pub match_count: usize,
    pub built_at: DateTime<Utc>,
    pub teams: Vec<TeamRatingRow>,
}

impl RatingsResponse {
    pub fn from_model(league: &str, model: &LeagueModel) -> Self {
        let teams = model
            .team_names()
            .into_iter()
            .map(|name| {
                let rating = &model.ratings[&name];
                TeamRatingRow::new(&name, rating)
            })
            .collect();

        Self {
            league: league.to_string(),
            avg_home_goals: model.avg_home_goals,
            avg_away_goals: model.avg_away_goals,
            match_count: model.match_count,
            built_at: model.built_at,
            teams,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_odds_serialize_as_null() {
        let result = PredictionResult {
            expected_home_goals: 0.0,
            expected_away_goals: 1.1,
            prob_home_win: 0.0,
            prob_draw: 33.3,
            prob_away_win: 66.7,
            fair_odds_home: f64::INFINITY,
            fair_odds_draw: 3.0,
            fair_odds_away: 1.5,
        };
        let response = PredictionResponse::from_result("F1", "Lille", "Brest", &result);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["fairOddsHome"].is_null());
        assert_eq!(json["fairOddsDraw"], 3.0);
        assert_eq!(json["homeTeam"], "Lille");
    }
}

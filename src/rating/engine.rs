use std::collections::HashMap;

use chrono::Utc;
use log::info;

use crate::config::settings::ModelSettings;
use crate::domain::MatchRecord;
use crate::errors::PredictionError;

use super::ewma::ewma_last;
use super::types::{LeagueModel, TeamRating};

/// Capped goal sequences for one team, split by venue, in feed order.
#[derive(Debug, Default)]
struct TeamHistory {
    home_scored: Vec<f64>,
    home_conceded: Vec<f64>,
    away_scored: Vec<f64>,
    away_conceded: Vec<f64>,
}

/// Fits a league model from a chronologically ordered match list.
///
/// The engine trusts the input order; `sequence_index` documents that order
/// but is not re-sorted here. Pure: no side effects beyond the returned
/// model.
pub fn fit_league_model(
    matches: &[MatchRecord],
    settings: &ModelSettings,
) -> Result<LeagueModel, PredictionError> {
    if matches.is_empty() {
        return Err(PredictionError::EmptyDataset);
    }

    let (avg_home_goals, avg_away_goals) = league_averages(matches, settings.goal_cap);
    let histories = collect_team_histories(matches, settings.goal_cap);

    info!(
        "Fitted {} teams from {} matches (league averages {:.2} home / {:.2} away)",
        histories.len(),
        matches.len(),
        avg_home_goals,
        avg_away_goals
    );

    let ratings = histories
        .into_iter()
        .map(|(team, history)| {
            let rating =
                build_team_rating(&history, settings.ewma_span, avg_home_goals, avg_away_goals);
            (team, rating)
        })
        .collect();

    Ok(LeagueModel {
        ratings,
        avg_home_goals,
        avg_away_goals,
        match_count: matches.len(),
        built_at: Utc::now(),
    })
}

/// League-wide means of capped home and away goals, across all matches.
fn league_averages(matches: &[MatchRecord], cap: f64) -> (f64, f64) {
    let count = matches.len() as f64;
    let home_total: f64 = matches.iter().map(|m| m.adjusted_home_goals(cap)).sum();
    let away_total: f64 = matches.iter().map(|m| m.adjusted_away_goals(cap)).sum();
    (home_total / count, away_total / count)
}

fn collect_team_histories(matches: &[MatchRecord], cap: f64) -> HashMap<String, TeamHistory> {
    let mut histories: HashMap<String, TeamHistory> = HashMap::new();

    for m in matches {
        let home_goals = m.adjusted_home_goals(cap);
        let away_goals = m.adjusted_away_goals(cap);

        let home = histories.entry(m.home_team.clone()).or_default();
        home.home_scored.push(home_goals);
        home.home_conceded.push(away_goals);

        let away = histories.entry(m.away_team.clone()).or_default();
        away.away_scored.push(away_goals);
        away.away_conceded.push(home_goals);
    }

    histories
}

fn build_team_rating(
    history: &TeamHistory,
    span: f64,
    avg_home_goals: f64,
    avg_away_goals: f64,
) -> TeamRating {
    // A side the team never played in defaults to the league home average,
    // uniformly for all four fields.
    let home_attack = ewma_last(&history.home_scored, span).unwrap_or(avg_home_goals);
    let home_defense = ewma_last(&history.home_conceded, span).unwrap_or(avg_home_goals);
    let away_attack = ewma_last(&history.away_scored, span).unwrap_or(avg_home_goals);
    let away_defense = ewma_last(&history.away_conceded, span).unwrap_or(avg_home_goals);

    TeamRating {
        home_attack,
        home_defense,
        away_attack,
        away_defense,
        attack_strength_home: home_attack / avg_home_goals,
        attack_strength_away: away_attack / avg_away_goals,
        defense_weakness_home: home_defense / avg_away_goals,
        defense_weakness_away: away_defense / avg_home_goals,
    }
}

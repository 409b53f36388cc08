use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// Per-team strength coefficients.
///
/// The four EWMA fields are recency-weighted averages of capped goals scored
/// and conceded, split by venue. The ratio fields are those EWMAs divided by
/// the league average for the matching venue; above 1.0 means above-average
/// attacking output, or above-average defensive leakiness.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRating {
    pub home_attack: f64,
    pub home_defense: f64,
    pub away_attack: f64,
    pub away_defense: f64,
    pub attack_strength_home: f64,
    pub attack_strength_away: f64,
    pub defense_weakness_home: f64,
    pub defense_weakness_away: f64,
}

/// A fitted league: one rating per team plus the league-wide goal averages
/// the ratios are anchored to. Read-only after construction; a rebuild
/// produces a whole new value.
#[derive(Debug, Clone)]
pub struct LeagueModel {
    pub ratings: HashMap<String, TeamRating>,
    pub avg_home_goals: f64,
    pub avg_away_goals: f64,
    pub match_count: usize,
    pub built_at: DateTime<Utc>,
}

impl LeagueModel {
    pub fn rating(&self, team: &str) -> Option<&TeamRating> {
        self.ratings.get(team)
    }

    /// Team names in alphabetical order, for dropdowns and tables.
    pub fn team_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.ratings.keys().cloned().collect();
        names.sort();
        names
    }
}

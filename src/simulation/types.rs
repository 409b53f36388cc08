/// Outcome distribution for one simulated fixture.
///
/// Probabilities are percentages rounded to one decimal; expected goals and
/// fair odds are rounded to two. A zero-probability outcome carries infinite
/// fair odds, which is a defined value here, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub expected_home_goals: f64,
    pub expected_away_goals: f64,
    pub prob_home_win: f64,
    pub prob_draw: f64,
    pub prob_away_win: f64,
    pub fair_odds_home: f64,
    pub fair_odds_draw: f64,
    pub fair_odds_away: f64,
}

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Poisson};

use crate::errors::PredictionError;
use crate::rating::{LeagueModel, TeamRating};

use super::types::PredictionResult;

/// Simulates a fixture with entropy-seeded randomness.
///
/// Repeated identical calls legitimately differ by sampling noise; that is
/// the production contract. Use [`simulate_seeded`] when reproducibility is
/// needed.
pub fn simulate(
    model: &LeagueModel,
    home_team: &str,
    away_team: &str,
    simulations: u32,
) -> Result<PredictionResult, PredictionError> {
    simulate_with_rng(model, home_team, away_team, simulations, &mut rand::thread_rng())
}

/// Deterministic variant: a fixed seed reproduces the exact outcome tallies.
pub fn simulate_seeded(
    model: &LeagueModel,
    home_team: &str,
    away_team: &str,
    simulations: u32,
    seed: u64,
) -> Result<PredictionResult, PredictionError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    simulate_with_rng(model, home_team, away_team, simulations, &mut rng)
}

pub fn simulate_with_rng<R: Rng>(
    model: &LeagueModel,
    home_team: &str,
    away_team: &str,
    simulations: u32,
    rng: &mut R,
) -> Result<PredictionResult, PredictionError> {
    if home_team == away_team {
        return Err(PredictionError::IdenticalTeams);
    }
    let home = model
        .rating(home_team)
        .ok_or_else(|| PredictionError::UnknownTeam(home_team.to_string()))?;
    let away = model
        .rating(away_team)
        .ok_or_else(|| PredictionError::UnknownTeam(away_team.to_string()))?;

    let (lambda_home, lambda_away) = expected_goals(model, home, away);

    let simulations = simulations.max(1);
    let home_sampler = goal_sampler(lambda_home);
    let away_sampler = goal_sampler(lambda_away);

    let mut home_wins = 0u32;
    let mut draws = 0u32;
    let mut away_wins = 0u32;
    for _ in 0..simulations {
        let home_goals = sample_goals(&home_sampler, rng);
        let away_goals = sample_goals(&away_sampler, rng);
        if home_goals > away_goals {
            home_wins += 1;
        } else if home_goals == away_goals {
            draws += 1;
        } else {
            away_wins += 1;
        }
    }

    let percent = |count: u32| f64::from(count) * 100.0 / f64::from(simulations);
    let prob_home = percent(home_wins);
    let prob_draw = percent(draws);
    let prob_away = percent(away_wins);

    Ok(PredictionResult {
        expected_home_goals: round_to(lambda_home, 2),
        expected_away_goals: round_to(lambda_away, 2),
        prob_home_win: round_to(prob_home, 1),
        prob_draw: round_to(prob_draw, 1),
        prob_away_win: round_to(prob_away, 1),
        fair_odds_home: fair_odds(prob_home),
        fair_odds_draw: fair_odds(prob_draw),
        fair_odds_away: fair_odds(prob_away),
    })
}

/// Expected goals for each side.
///
/// Home edge comes entirely from the venue split of the ratings and the
/// separate league averages; no extra multiplier is applied.
pub fn expected_goals(model: &LeagueModel, home: &TeamRating, away: &TeamRating) -> (f64, f64) {
    let lambda_home = home.attack_strength_home * away.defense_weakness_away * model.avg_home_goals;
    let lambda_away = away.attack_strength_away * home.defense_weakness_home * model.avg_away_goals;
    (lambda_home, lambda_away)
}

/// Poisson is undefined at rate zero; a side with a zero goal expectation
/// simply scores zero in every simulated match.
fn goal_sampler(lambda: f64) -> Option<Poisson<f64>> {
    if lambda > 0.0 {
        Poisson::new(lambda).ok()
    } else {
        None
    }
}

fn sample_goals<R: Rng>(sampler: &Option<Poisson<f64>>, rng: &mut R) -> u64 {
    match sampler {
        Some(poisson) => poisson.sample(rng) as u64,
        None => 0,
    }
}

/// Fair decimal odds from an unrounded probability percentage.
fn fair_odds(prob_percent: f64) -> f64 {
    if prob_percent > 0.0 {
        round_to(100.0 / prob_percent, 2)
    } else {
        f64::INFINITY
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod feed;
pub mod http;
pub mod rating;
pub mod services;
pub mod simulation;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use crate::cache::FeedCache;
use crate::cli::{Cli, Command};
use crate::config::leagues::{LeagueConfig, find_league};
use crate::config::settings::AppConfig;
use crate::feed::FeedClient;
use crate::rating::LeagueModel;
use crate::services::server::ServerService;
use crate::simulation::PredictionResult;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_fetch(league_code: &str, force: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let league = resolve_league(league_code)?;

        let mut feed = FeedClient::new(config.feed.clone(), FeedCache::from_env()?)?;
        let matches = feed.load_matches(league, force).await?;

        println!(
            "Fetched {} matches for {} ({})",
            matches.len(),
            league.name,
            league.code
        );
        Ok(())
    })
}

pub fn handle_ratings(league_code: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let league = resolve_league(league_code)?;
        let model = build_model(&config, league).await?;

        print_ratings_table(league, &model);
        Ok(())
    })
}

pub fn handle_predict(
    home: &str,
    away: &str,
    league_code: &str,
    simulations: Option<u32>,
    seed: Option<u64>,
) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let league = resolve_league(league_code)?;
        let model = build_model(&config, league).await?;

        let simulations = simulations.unwrap_or(config.model.simulations);
        let result = match seed {
            Some(seed) => simulation::simulate_seeded(&model, home, away, simulations, seed)?,
            None => simulation::simulate(&model, home, away, simulations)?,
        };

        print_prediction(home, away, simulations, &result);
        Ok(())
    })
}

fn resolve_league(code: &str) -> Result<&'static LeagueConfig> {
    find_league(code).ok_or_else(|| anyhow::anyhow!("unknown league '{code}'"))
}

async fn build_model(config: &AppConfig, league: &LeagueConfig) -> Result<LeagueModel> {
    let mut feed = FeedClient::new(config.feed.clone(), FeedCache::from_env()?)?;
    let matches = feed.load_matches(league, false).await?;
    Ok(rating::fit_league_model(&matches, &config.model)?)
}

fn print_ratings_table(league: &LeagueConfig, model: &LeagueModel) {
    println!(
        "{}: {} matches, league averages {:.2} home / {:.2} away\n",
        league.name.bold(),
        model.match_count,
        model.avg_home_goals,
        model.avg_away_goals
    );
    println!(
        "{:<22} {:>8} {:>8} {:>8} {:>8}",
        "Team".bold(),
        "AttH".bold(),
        "AttA".bold(),
        "DefH".bold(),
        "DefA".bold()
    );

    for team in model.team_names() {
        let rating = &model.ratings[&team];
        println!(
            "{:<22} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
            team,
            rating.attack_strength_home,
            rating.attack_strength_away,
            rating.defense_weakness_home,
            rating.defense_weakness_away
        );
    }
}

fn print_prediction(home: &str, away: &str, simulations: u32, result: &PredictionResult) {
    println!("{}", "Expected goals".bold());
    println!("  {:<20} {:.2}", home, result.expected_home_goals);
    println!("  {:<20} {:.2}", away, result.expected_away_goals);

    println!("\n{} ({} simulated matches)", "Outcome".bold(), simulations);
    println!(
        "  {:<20} {:>5.1}%   fair odds {}",
        format!("{} win", home),
        result.prob_home_win,
        format_odds(result.fair_odds_home)
    );
    println!(
        "  {:<20} {:>5.1}%   fair odds {}",
        "Draw",
        result.prob_draw,
        format_odds(result.fair_odds_draw)
    );
    println!(
        "  {:<20} {:>5.1}%   fair odds {}",
        format!("{} win", away),
        result.prob_away_win,
        format_odds(result.fair_odds_away)
    );
}

fn format_odds(odds: f64) -> String {
    if odds.is_finite() {
        format!("{:.2}", odds)
    } else {
        // Zero probability: no stake would ever pay out.
        "∞".to_string()
    }
}

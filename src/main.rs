use anyhow::Result;

use football_match_predictor::cli::Command;
use football_match_predictor::{
    handle_fetch, handle_predict, handle_ratings, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Fetch { league, force } => handle_fetch(league, *force),
        Command::Ratings { league } => handle_ratings(league),
        Command::Predict {
            home,
            away,
            league,
            simulations,
            seed,
        } => handle_predict(home, away, league, *simulations, *seed),
    }
}

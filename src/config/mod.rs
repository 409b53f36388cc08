pub mod leagues;
pub mod settings;

pub use leagues::{LeagueConfig, find_league, get_leagues};
pub use settings::AppConfig;

pub mod engine;
pub mod ewma;
pub mod types;

pub use engine::fit_league_model;
pub use ewma::ewma_last;
pub use types::{LeagueModel, TeamRating};

use thiserror::Error;

/// Terminal failure conditions for model building and prediction.
///
/// None of these are retried inside the core; retry policy, if any, belongs
/// to the data feed. An unknown team is always reported, never silently
/// replaced by a league-average rating.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("match dataset is empty")]
    EmptyDataset,

    #[error("historical data unavailable: {0}")]
    DataUnavailable(String),

    #[error("unknown league '{0}'")]
    InvalidLeague(String),

    #[error("unknown team '{0}'")]
    UnknownTeam(String),

    #[error("home and away team must be different")]
    IdenticalTeams,

    #[error("missing input: {0}")]
    MissingInput(&'static str),
}

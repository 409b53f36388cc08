use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::sync::Arc;

use crate::api::models::ErrorResponse;
use crate::errors::PredictionError;
use crate::services::store::ModelStore;

pub mod pages;
pub mod predict;
pub mod ratings;

pub struct AppState {
    pub store: Arc<ModelStore>,
}

/// Map a core error onto the wire contract: caller mistakes are 400 with an
/// `{error}` body, an unreachable feed is 502, a degenerate dataset is 500.
pub fn error_response(err: &PredictionError) -> Response {
    let status = match err {
        PredictionError::InvalidLeague(_)
        | PredictionError::UnknownTeam(_)
        | PredictionError::IdenticalTeams
        | PredictionError::MissingInput(_) => StatusCode::BAD_REQUEST,
        PredictionError::DataUnavailable(_) => StatusCode::BAD_GATEWAY,
        PredictionError::EmptyDataset => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

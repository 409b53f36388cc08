use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{PredictRequest, PredictionResponse};

use super::{AppState, error_response};

pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> impl IntoResponse {
    let default_league = state.store.config().feed.default_league;
    let league = request.league.as_deref().unwrap_or(default_league);
    let home_team = request.home_team.as_deref().unwrap_or("");
    let away_team = request.away_team.as_deref().unwrap_or("");

    match state.store.predict(league, home_team, away_team).await {
        Ok(result) => Json(PredictionResponse::from_result(
            league,
            home_team.trim(),
            away_team.trim(),
            &result,
        ))
        .into_response(),
        Err(e) => error_response(&e),
    }
}

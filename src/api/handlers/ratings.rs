use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use log::{error, info};
use std::sync::Arc;

use crate::api::models::{LeagueListItem, RatingsResponse, TeamListResponse};
use crate::config::leagues::{find_league, get_leagues as league_registry};

use super::{AppState, error_response};

pub async fn get_leagues() -> impl IntoResponse {
    let leagues: Vec<LeagueListItem> = league_registry().iter().map(LeagueListItem::from).collect();
    Json(leagues)
}

pub async fn get_teams(
    State(state): State<Arc<AppState>>,
    Path(league): Path<String>,
) -> impl IntoResponse {
    match state.store.teams(&league).await {
        Ok(teams) => Json(TeamListResponse {
            league: league.to_uppercase(),
            teams,
        })
        .into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn get_ratings(
    State(state): State<Arc<AppState>>,
    Path(league): Path<String>,
) -> impl IntoResponse {
    match state.store.build_or_get(&league, false).await {
        Ok(model) => Json(RatingsResponse::from_model(&league.to_uppercase(), &model)).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn admin_refresh(
    State(state): State<Arc<AppState>>,
    Path(league): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let token = std::env::var("ADMIN_TOKEN").unwrap_or_else(|_| "secret".to_string());
    let expected = format!("Bearer {}", token);
    let auth_header = headers.get("Authorization").and_then(|h| h.to_str().ok());
    if auth_header != Some(expected.as_str()) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let Some(league) = find_league(&league) else {
        return (StatusCode::BAD_REQUEST, "Unknown league").into_response();
    };

    let store = Arc::clone(&state.store);
    tokio::spawn(async move {
        info!("Admin triggered refresh for {}", league.code);
        match store.rebuild(league, true).await {
            Ok(model) => info!(
                "Refresh for {} completed ({} matches)",
                league.code, model.match_count
            ),
            Err(e) => error!("Refresh for {} failed: {}", league.code, e),
        }
    });

    (StatusCode::ACCEPTED, "Refresh triggered").into_response()
}

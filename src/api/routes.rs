use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    pages::index_page,
    predict::predict,
    ratings::{admin_refresh, get_leagues, get_ratings, get_teams},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/api/leagues", get(get_leagues))
        .route("/api/teams/:league", get(get_teams))
        .route("/api/ratings/:league", get(get_ratings))
        .route("/api/predict", post(predict))
        .route("/api/admin/refresh/:league", post(admin_refresh))
        .with_state(state)
}

use anyhow::Result;
use log::{info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::cache::FeedCache;
use crate::config::settings::AppConfig;
use crate::feed::FeedClient;
use crate::services::store::ModelStore;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let feed = FeedClient::new(self.config.feed.clone(), FeedCache::from_env()?)?;
        let store = Arc::new(ModelStore::new(self.config.clone(), feed));

        self.warm_default_league(&store).await;

        let state = Arc::new(AppState { store });
        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Build the default league's model before accepting traffic, so the
    /// first prediction does not pay for the feed download. A warm-up
    /// failure is not fatal; the model is retried lazily on first request.
    async fn warm_default_league(&self, store: &Arc<ModelStore>) {
        let code = self.config.feed.default_league;
        match store.build_or_get(code, false).await {
            Ok(model) => info!("Model ready for {} ({} teams)", code, model.ratings.len()),
            Err(e) => warn!("Could not warm model for {}: {}", code, e),
        }
    }
}

// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::stats_repo::StatsRepo;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) stats_repo: Arc<StatsRepo>,
}

pub fn app(stats_repo: Arc<StatsRepo>) -> Router {
    let state = AppState { stats_repo };
    Router::new()
        .route("/", get(|| async { "botstats" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route(
            "/api/bots/{id}/stats/{stat}",
            get(http::bot_stats_handler), // GET /api/bots/{id}/stats/{stat}
        )
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

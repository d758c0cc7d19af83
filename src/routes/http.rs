// GET handlers: version, bot stat series

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::AppState;
use crate::models::{InvalidStatName, StatName};
use crate::stats_repo::series::series_for_stat;

/// Package version (from Cargo.toml at build time).
const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

/// GET /version — returns service name and version.
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/bots/{id}/stats/{stat} — the [daily, hourly] series pair for one
/// stat. The stat name is parsed against the closed set before any query runs;
/// an unknown name is rejected without touching the database.
pub(super) async fn bot_stats_handler(
    Path((bot_id, stat)): Path<(i64, String)>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let stat: StatName = stat
        .parse()
        .map_err(|e: InvalidStatName| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let bot = state
        .stats_repo
        .get_bot(bot_id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("no bot with id {}", bot_id)))?;

    let samples = state
        .stats_repo
        .get_samples(bot.id)
        .await
        .map_err(internal_error)?;

    Ok(axum::Json(series_for_stat(&bot.name, &samples, stat)))
}

fn internal_error(e: anyhow::Error) -> (StatusCode, String) {
    tracing::warn!(error = %e, "stats query failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "internal error".into())
}

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use sea_orm::{ConnectionTrait, Statement};
use serde_json::json;
use util::state::AppState;

use crate::error::ApiError;
use crate::response::ApiResponse;

/// Builds the health route group.
///
/// Includes `GET /health` (process liveness, no dependency checks) and
/// `GET /db-health` (storage reachability). Useful for uptime checks, load
/// balancers, or deployment health monitoring.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/db-health", get(db_health_check))
}

/// GET /health
///
/// Returns a simple success response to indicate the API is running. Always
/// `200 OK` regardless of storage state.
///
/// ```json
/// {
///   "success": true,
///   "data": { "status": "ok" },
///   "error": null,
///   "message": "API is healthy"
/// }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success(json!({ "status": "ok" }), "API is healthy"))
}

/// GET /db-health
///
/// Issues a trivial `SELECT 1` against the pool. An unreachable storage
/// engine surfaces as the generic storage-failure response (`500`).
async fn db_health_check(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let db = app_state.db();
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "SELECT 1",
    ))
    .await?;

    Ok(Json(ApiResponse::success(
        json!({ "db": "ok" }),
        "Database is healthy",
    )))
}

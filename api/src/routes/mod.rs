//! HTTP route entry point.
//!
//! This module defines all HTTP entry points for the service. Route groups:
//! - `/health` → Liveness check (no dependency checks)
//! - `/db-health` → Storage reachability check
//! - `/api/v1/tickets` → Ticket creation and paginated listing

use axum::Router;
use util::state::AppState;

pub mod common;
pub mod health;
pub mod tickets;

/// Builds the complete application router for all HTTP endpoints.
///
/// Health endpoints live at the root; ticket routes are mounted under the
/// `/api/v1` version prefix so future resources can join them there.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health::health_routes())
        .nest("/api/v1/tickets", tickets::ticket_routes())
        .with_state(app_state)
}

//! Ticket routes module.
//!
//! Provides the `/tickets` route group:
//! - `POST /tickets` → Create a new ticket
//! - `GET  /tickets` → List tickets with limit/offset pagination
//!
//! All input is validated at this boundary before any repository call.

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use get::list_tickets;
use post::create_ticket;

/// Builds and returns the `/tickets` route group.
pub fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_ticket))
        .route("/", get(list_tickets))
}

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use db::models::tickets::Model as TicketModel;
use serde::Deserialize;
use util::state::AppState;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::tickets::common::TicketResponse;

#[derive(Debug, Deserialize)]
pub struct ListTicketsQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/v1/tickets
///
/// Lists tickets newest first. `limit` defaults to 20 and must be in
/// [1, 100]; `offset` defaults to 0 and must be non-negative. Out-of-range
/// values are rejected rather than clamped.
///
/// ### Responses
/// - `200 OK` → envelope with the ticket page,
///   message `"Retrieved {n} tickets"`
/// - `422 Unprocessable Entity` → non-numeric or out-of-range parameters
/// - `500 Internal Server Error` → storage failure, generic envelope
pub async fn list_tickets(
    State(app_state): State<AppState>,
    params: Result<Query<ListTicketsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    let limit = params.limit.unwrap_or(20);
    if !(1..=100).contains(&limit) {
        return Err(ApiError::Validation(
            "limit must be between 1 and 100".to_string(),
        ));
    }

    let offset = params.offset.unwrap_or(0);
    if offset < 0 {
        return Err(ApiError::Validation(
            "offset must be greater than or equal to 0".to_string(),
        ));
    }

    let tickets = TicketModel::list(app_state.db(), limit as u64, offset as u64).await?;

    let count = tickets.len();
    let tickets: Vec<TicketResponse> = tickets.into_iter().map(TicketResponse::from).collect();

    Ok(Json(ApiResponse::success(
        tickets,
        format!("Retrieved {count} tickets"),
    )))
}

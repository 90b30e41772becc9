use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::tickets::{Model as TicketModel, TicketPriority};
use serde::Deserialize;
use util::state::AppState;
use validator::{Validate, ValidationError};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::format_validation_errors;
use crate::routes::tickets::common::TicketResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTicketRequest {
    #[validate(custom(function = validate_title))]
    pub title: String,

    pub description: Option<String>,

    /// Validated separately against [`TicketPriority`]; `None` defaults to
    /// `medium`.
    pub priority: Option<String>,
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.trim().chars().count();
    if len < 1 || len > 200 {
        return Err(ValidationError::new("title")
            .with_message("title must be between 1 and 200 characters".into()));
    }
    Ok(())
}

/// POST /api/v1/tickets
///
/// Creates a new ticket. The server assigns `id`, `status` (always `open`)
/// and `created_at`; `priority` defaults to `medium` when omitted.
///
/// ### Request body
/// ```json
/// { "title": "Server down", "description": "Prod is on fire", "priority": "urgent" }
/// ```
///
/// ### Responses
/// - `201 Created` → envelope with the created ticket,
///   message `"Ticket created successfully"`
/// - `422 Unprocessable Entity` → validation failure (bad title length,
///   unknown priority, malformed body)
/// - `500 Internal Server Error` → storage failure, generic envelope
pub async fn create_ticket(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateTicketRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    if let Err(validation_errors) = req.validate() {
        return Err(ApiError::Validation(format_validation_errors(
            &validation_errors,
        )));
    }

    let priority = match req.priority.as_deref() {
        None => TicketPriority::Medium,
        Some(value) => value.parse::<TicketPriority>().map_err(|_| {
            ApiError::Validation("priority must be one of: low, medium, high, urgent".to_string())
        })?,
    };

    let ticket =
        TicketModel::create(app_state.db(), &req.title, req.description.as_deref(), priority)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            TicketResponse::from(ticket),
            "Ticket created successfully",
        )),
    ))
}

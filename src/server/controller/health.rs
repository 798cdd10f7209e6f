use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{error::AppError, startup, state::AppState},
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

pub const HEALTHY_MESSAGE: &str = "It's healthy";

/// Report service health.
///
/// Pings the database and reports success only if it answers.
///
/// # Returns
/// - `200 OK` - Database reachable
/// - `500 Internal Server Error` - Database unreachable
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service and database are healthy", body = MessageDto),
        (status = 500, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    startup::check_database(&state.db).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: HEALTHY_MESSAGE.to_string(),
        }),
    ))
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every failed request.
///
/// `message` is a short machine-readable code such as `missing-car-name`, or the
/// driver message for data-access failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}

/// Plain message body, used by the health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Generic write acknowledgement carrying the affected identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResponseGeneralDto {
    pub id: i32,
    pub message: String,
}

impl ResponseGeneralDto {
    pub fn success(id: i32) -> Self {
        Self {
            id,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

pub const SUCCESS_MESSAGE: &str = "success";

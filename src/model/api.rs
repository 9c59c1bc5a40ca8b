use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every failed request.
///
/// `status_code` mirrors the HTTP status line.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
    pub status_code: u16,
}

/// Plain acknowledgment body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub msg: String,
}

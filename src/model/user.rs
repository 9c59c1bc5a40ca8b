use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user.
///
/// Carries no credential fields; the password never leaves the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
}

use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// Passwords are never part of the response.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Every user", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let dtos: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok(Json(dtos))
}

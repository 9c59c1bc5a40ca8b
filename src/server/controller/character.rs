use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, character::CharacterDto},
    server::{
        error::AppError,
        service::character::{CharacterService, CHARACTER_NOT_FOUND},
        state::AppState,
        util::parse::path_id,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "people";

/// List all characters.
///
/// # Returns
/// - `200 OK` - Every character in ID order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/people",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Every character in the catalog", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db).get_all().await?;

    let dtos: Vec<CharacterDto> = characters.into_iter().map(|c| c.into_dto()).collect();

    Ok(Json(dtos))
}

/// Get a character by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Character ID from the path
///
/// # Returns
/// - `200 OK` - The character
/// - `404 Not Found` - No character with that ID, or the ID is not an integer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "The requested character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path, CHARACTER_NOT_FOUND)?;

    let character = CharacterService::new(&state.db).get_by_id(id).await?;

    Ok(Json(character.into_dto()))
}

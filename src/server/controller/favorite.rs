use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{AddFavoriteDto, FavoriteDto, UserIdQuery},
    },
    server::{
        error::AppError,
        model::favorite::{
            AddFavoriteParams, FavoriteTarget, GetFavoritesParam, RemoveFavoriteParams,
        },
        service::favorite::FavoriteService,
        state::AppState,
        util::parse::{parse_user_id, path_id},
    },
};
use serde_json::Value;

const INVALID_JSON: &str = "JSON inválido";

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// List a user's favorites.
///
/// Returns the user's favorite planets and characters in the order they were added.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - `user_id` query parameter
///
/// # Returns
/// - `200 OK` - Favorites of the user
/// - `400 Bad Request` - `user_id` missing, not an integer, or zero
/// - `404 Not Found` - User does not exist
/// - `500 Internal Server Error` - Database error or malformed stored favorite
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = FAVORITE_TAG,
    params(UserIdQuery),
    responses(
        (status = 200, description = "Favorites of the user", body = Vec<FavoriteDto>),
        (status = 400, description = "Missing user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let param = GetFavoritesParam {
        user_id: parse_user_id(query.user_id.as_deref()),
    };

    let favorites = FavoriteService::new(&state.db).get_by_user(param).await?;

    let dtos: Vec<FavoriteDto> = favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok(Json(dtos))
}

/// Add a planet to a user's favorites.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `planet_id` - Planet ID from the path
/// - `payload` - JSON object carrying the `user_id`
///
/// # Returns
/// - `201 Created` - The created favorite
/// - `400 Bad Request` - Body is not a JSON object, missing user ID, or planet already a favorite
/// - `404 Not Found` - User or planet does not exist, or the ID is not an integer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    request_body = AddFavoriteDto,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 400, description = "Invalid JSON, missing user ID, or duplicate favorite", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let target = target_from_path(path, FavoriteTarget::Planet)?;

    add_favorite(&state, target, payload).await
}

/// Add a character to a user's favorites.
///
/// # Returns
/// - `201 Created` - The created favorite
/// - `400 Bad Request` - Invalid JSON, missing user ID, or character already a favorite
/// - `404 Not Found` - User or character does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    request_body = AddFavoriteDto,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 400, description = "Invalid JSON, missing user ID, or duplicate favorite", body = ErrorDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let target = target_from_path(path, FavoriteTarget::Character)?;

    add_favorite(&state, target, payload).await
}

/// Remove a planet from a user's favorites.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - Missing user ID
/// - `404 Not Found` - User or favorite does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID"),
        UserIdQuery
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 400, description = "Missing user ID", body = ErrorDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let target = target_from_path(path, FavoriteTarget::Planet)?;

    remove_favorite(&state, target, query).await
}

/// Remove a character from a user's favorites.
#[utoipa::path(
    delete,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Character ID"),
        UserIdQuery
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 400, description = "Missing user ID", body = ErrorDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let target = target_from_path(path, FavoriteTarget::Character)?;

    remove_favorite(&state, target, query).await
}

/// Builds the target from the path id, answering the target's `NotFound` when the
/// segment is not an integer.
fn target_from_path(
    path: Result<Path<i32>, PathRejection>,
    kind: fn(i32) -> FavoriteTarget,
) -> Result<FavoriteTarget, AppError> {
    let not_found = kind(0).not_found_message();

    path_id(path, not_found).map(kind)
}

async fn add_favorite(
    state: &AppState,
    target: FavoriteTarget,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<FavoriteDto>), AppError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!("Rejected favorite body: {}", rejection);
        AppError::InvalidInput(INVALID_JSON.to_string())
    })?;

    let Value::Object(body) = body else {
        return Err(AppError::InvalidInput(INVALID_JSON.to_string()));
    };

    let params = AddFavoriteParams::from_body(target, &body);

    let favorite = FavoriteService::new(&state.db).add(params).await?;

    Ok((StatusCode::CREATED, Json(favorite.into_dto())))
}

async fn remove_favorite(
    state: &AppState,
    target: FavoriteTarget,
    query: UserIdQuery,
) -> Result<Json<MessageDto>, AppError> {
    let params = RemoveFavoriteParams {
        user_id: parse_user_id(query.user_id.as_deref()),
        target,
    };

    let removed = FavoriteService::new(&state.db).remove(params).await?;

    Ok(Json(MessageDto {
        msg: removed.removed_message().to_string(),
    }))
}

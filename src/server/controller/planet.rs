use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, planet::PlanetDto},
    server::{
        error::AppError,
        service::planet::{PlanetService, PLANET_NOT_FOUND},
        state::AppState,
        util::parse::path_id,
    },
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planets";

/// List all planets.
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Every planet in the catalog", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    let dtos: Vec<PlanetDto> = planets.into_iter().map(|p| p.into_dto()).collect();

    Ok(Json(dtos))
}

/// Get a planet by ID.
///
/// # Returns
/// - `200 OK` - The planet
/// - `404 Not Found` - No planet with that ID, or the ID is not an integer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "The requested planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path, PLANET_NOT_FOUND)?;

    let planet = PlanetService::new(&state.db).get_by_id(id).await?;

    Ok(Json(planet.into_dto()))
}

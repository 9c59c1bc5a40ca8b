//! Route table and OpenAPI document.
//!
//! Routes are registered through `utoipa_axum::routes!` so every handler's
//! `#[utoipa::path]` lands in the generated document served at `/api/docs`.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

// Globs bring in the `__path_*` structs `routes!` expands to alongside each handler.
use crate::server::{
    controller::{character::*, favorite::*, planet::*, user::*},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Holonet API",
    description = "Star Wars catalog of characters and planets with per-user favorites"
))]
pub struct ApiDoc;

/// Builds the API routes together with the Swagger UI.
pub fn router() -> Router<AppState> {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_characters))
        .routes(routes!(get_character))
        .routes(routes!(get_planets))
        .routes(routes!(get_planet))
        .routes(routes!(get_users))
        .routes(routes!(get_user_favorites))
        .routes(routes!(add_favorite_planet, remove_favorite_planet))
        .routes(routes!(add_favorite_character, remove_favorite_character))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Builds the complete application with state and HTTP middleware applied.
pub fn app(state: AppState) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

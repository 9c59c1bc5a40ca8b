use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A user's favorite planet or character.
///
/// Exactly one of `planet_id` and `character_id` is present in the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_id: Option<i32>,
}

/// Request body for adding a favorite.
///
/// The body must be a JSON object. `user_id` is also accepted as a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddFavoriteDto {
    #[serde(default)]
    pub user_id: Option<i32>,
}

/// `?user_id=` query string for listing and removing favorites.
///
/// Kept as raw text so a non-numeric value is reported as a missing id rather
/// than rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserIdQuery {
    /// ID of the user who owns the favorites
    pub user_id: Option<String>,
}

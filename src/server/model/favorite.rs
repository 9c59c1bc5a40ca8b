//! Favorite domain models and parameters.
//!
//! A favorite links a user to exactly one planet or one character. The database
//! row stores that as two nullable columns; the domain model stores it as a
//! `FavoriteTarget` so a favorite with both or neither target cannot be built.

use serde_json::{Map, Value};

use crate::{
    model::favorite::FavoriteDto,
    server::{error::internal::InternalError, util::parse::json_user_id},
};

/// The planet or character a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    Character(i32),
}

impl FavoriteTarget {
    /// ID of the referenced planet or character.
    pub fn id(&self) -> i32 {
        match self {
            Self::Planet(id) | Self::Character(id) => *id,
        }
    }

    /// Lowercase name of the target kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Planet(_) => "planet",
            Self::Character(_) => "character",
        }
    }

    /// Message returned when the referenced planet or character does not exist.
    pub fn not_found_message(&self) -> &'static str {
        match self {
            Self::Planet(_) => "Planeta no encontrado",
            Self::Character(_) => "Personaje no encontrado",
        }
    }

    /// Message returned when the user already has this target as a favorite.
    pub fn duplicate_message(&self) -> &'static str {
        match self {
            Self::Planet(_) => "El planeta ya está en los favoritos del usuario",
            Self::Character(_) => "El personaje ya está en los favoritos del usuario",
        }
    }

    /// Confirmation returned after the favorite is removed.
    pub fn removed_message(&self) -> &'static str {
        match self {
            Self::Planet(_) => "Planeta favorito eliminado correctamente",
            Self::Character(_) => "Personaje favorito eliminado correctamente",
        }
    }

    /// Column values for `(planet_id, character_id)`.
    pub fn into_columns(self) -> (Option<i32>, Option<i32>) {
        match self {
            Self::Planet(id) => (Some(id), None),
            Self::Character(id) => (None, Some(id)),
        }
    }
}

/// A stored favorite.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTarget,
}

impl Favorite {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The row references exactly one target
    /// - `Err(InternalError::MalformedFavorite)` - Both or neither target columns are set
    pub fn from_entity(entity: entity::favorite::Model) -> Result<Self, InternalError> {
        let target = match (entity.planet_id, entity.character_id) {
            (Some(planet_id), None) => FavoriteTarget::Planet(planet_id),
            (None, Some(character_id)) => FavoriteTarget::Character(character_id),
            (planet_id, character_id) => {
                return Err(InternalError::MalformedFavorite {
                    id: entity.id,
                    planet_id,
                    character_id,
                })
            }
        };

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            target,
        })
    }

    /// Converts the favorite to a DTO, filling only the column that matches the target.
    pub fn into_dto(self) -> FavoriteDto {
        let (planet_id, character_id) = self.target.into_columns();

        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            planet_id,
            character_id,
        }
    }
}

/// Parameters for listing a user's favorites.
#[derive(Debug, Clone)]
pub struct GetFavoritesParam {
    /// Owner of the favorites; `None` when the request did not supply one.
    pub user_id: Option<i32>,
}

/// Parameters for adding a favorite.
#[derive(Debug, Clone)]
pub struct AddFavoriteParams {
    /// User adding the favorite; `None` when absent or zero.
    pub user_id: Option<i32>,
    pub target: FavoriteTarget,
}

impl AddFavoriteParams {
    /// Builds the parameters from the request body object and the target taken
    /// from the path.
    ///
    /// `user_id` may be an integer or a numeric string; any other value is missing.
    pub fn from_body(target: FavoriteTarget, body: &Map<String, Value>) -> Self {
        Self {
            user_id: json_user_id(body.get("user_id")),
            target,
        }
    }
}

/// Parameters for removing a favorite.
#[derive(Debug, Clone)]
pub struct RemoveFavoriteParams {
    /// Owner of the favorite; `None` when the request did not supply one.
    pub user_id: Option<i32>,
    pub target: FavoriteTarget,
}

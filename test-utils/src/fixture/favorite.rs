//! Fixture for favorite test data.
//!
//! The builder accepts any combination of targets so conversion code can be
//! tested against rows the service would never write.

use entity::favorite;

/// Default test favorite ID.
pub const DEFAULT_ID: i32 = 1;

/// Default owning user ID.
pub const DEFAULT_USER_ID: i32 = 1;

/// Default planet target.
pub const DEFAULT_PLANET_ID: i32 = 5;

/// Creates a planet favorite entity model with default values.
pub fn entity() -> favorite::Model {
    entity_builder().build()
}

/// Creates a customizable favorite entity builder.
///
/// Defaults to a planet favorite (`planet_id = 5`, `character_id = None`).
pub fn entity_builder() -> FavoriteEntityBuilder {
    FavoriteEntityBuilder::default()
}

/// Builder for favorite entity models.
pub struct FavoriteEntityBuilder {
    id: i32,
    user_id: i32,
    planet_id: Option<i32>,
    character_id: Option<i32>,
}

impl Default for FavoriteEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID,
            user_id: DEFAULT_USER_ID,
            planet_id: Some(DEFAULT_PLANET_ID),
            character_id: None,
        }
    }
}

impl FavoriteEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn planet_id(mut self, planet_id: Option<i32>) -> Self {
        self.planet_id = planet_id;
        self
    }

    pub fn character_id(mut self, character_id: Option<i32>) -> Self {
        self.character_id = character_id;
        self
    }

    /// Builds the entity model.
    pub fn build(self) -> favorite::Model {
        favorite::Model {
            id: self.id,
            user_id: self.user_id,
            planet_id: self.planet_id,
            character_id: self.character_id,
        }
    }
}

//! Favorite factory for inserting join rows directly.
//!
//! Bypasses the service-layer checks so tests can arrange any state, including
//! rows that the service would refuse to create.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating favorite rows with raw column values.
///
/// # Example
///
/// ```rust,ignore
/// // A malformed row pointing at neither a planet nor a character
/// let orphan = FavoriteFactory::new(&db, user.id).build().await?;
/// ```
pub struct FavoriteFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    planet_id: Option<i32>,
    character_id: Option<i32>,
}

impl<'a> FavoriteFactory<'a> {
    /// Creates a new FavoriteFactory for the given user with no target set.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            planet_id: None,
            character_id: None,
        }
    }

    pub fn planet_id(mut self, planet_id: i32) -> Self {
        self.planet_id = Some(planet_id);
        self
    }

    pub fn character_id(mut self, character_id: i32) -> Self {
        self.character_id = Some(character_id);
        self
    }

    /// Builds and inserts the favorite entity into the database.
    pub async fn build(self) -> Result<entity::favorite::Model, DbErr> {
        entity::favorite::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            planet_id: ActiveValue::Set(self.planet_id),
            character_id: ActiveValue::Set(self.character_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a favorite linking `user_id` to `planet_id`.
pub async fn create_favorite_planet(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    FavoriteFactory::new(db, user_id)
        .planet_id(planet_id)
        .build()
        .await
}

/// Creates a favorite linking `user_id` to `character_id`.
pub async fn create_favorite_character(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    FavoriteFactory::new(db, user_id)
        .character_id(character_id)
        .build()
        .await
}

//! Favorite data repository for database operations.
//!
//! Queries are keyed by `FavoriteTarget`, which selects the `planet_id` or
//! `character_id` column. Rows are converted into the domain `Favorite`; a row with
//! both or neither target column set surfaces as `InternalError::MalformedFavorite`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::favorite::{Favorite, FavoriteTarget},
};

/// Repository providing database operations for favorites.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, listing, looking up, and deleting favorite records.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new FavoriteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every favorite owned by a user, in insertion order.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the favorites
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - Favorites for the user (empty if none)
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored row references both or neither target
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        let entities = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|entity| Favorite::from_entity(entity).map_err(AppError::from))
            .collect()
    }

    /// Finds the favorite linking a user to a specific planet or character.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the favorite
    /// - `target` - Planet or character the favorite points at
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - The user already has this target as a favorite
    /// - `Ok(None)` - No such favorite
    /// - `Err(AppError)` - Database error or malformed row
    pub async fn find_by_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, AppError> {
        let target_filter = match target {
            FavoriteTarget::Planet(id) => entity::favorite::Column::PlanetId.eq(id),
            FavoriteTarget::Character(id) => entity::favorite::Column::CharacterId.eq(id),
        };

        let entity = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(target_filter)
            .one(self.db)
            .await?;

        Ok(entity.map(Favorite::from_entity).transpose()?)
    }

    /// Inserts a favorite linking a user to a planet or character.
    ///
    /// Only the column matching the target is set. The unique indexes on
    /// `(user_id, planet_id)` and `(user_id, character_id)` reject duplicates.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The inserted favorite
    /// - `Err(AppError::DbErr)` - Insert failed, including unique or foreign key violations
    pub async fn create(&self, user_id: i32, target: FavoriteTarget) -> Result<Favorite, AppError> {
        let (planet_id, character_id) = target.into_columns();

        let entity = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite::from_entity(entity)?)
    }

    /// Deletes a favorite by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No row with that ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Favorite::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

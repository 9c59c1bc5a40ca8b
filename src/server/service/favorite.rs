//! Favorite service for listing, adding, and removing user favorites.
//!
//! Every operation follows the same check order: the user ID must be present, the
//! user must exist, then the target-specific checks run. The first failing check
//! decides the error returned to the client.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{
        character::CharacterRepository, favorite::FavoriteRepository, planet::PlanetRepository,
        user::UserRepository,
    },
    error::AppError,
    model::favorite::{
        AddFavoriteParams, Favorite, FavoriteTarget, GetFavoritesParam, RemoveFavoriteParams,
    },
};

const MISSING_USER_ID: &str = "Se requiere el ID del usuario";
const USER_NOT_FOUND: &str = "Usuario no encontrado";
const FAVORITE_NOT_FOUND: &str = "Favorito no encontrado";

/// Service managing the favorites a user keeps of planets and characters.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every favorite of a user in insertion order.
    ///
    /// # Arguments
    /// - `param` - Contains the optional user ID taken from the query string
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - Favorites of the user, possibly empty
    /// - `Err(AppError::MissingParameter)` - No user ID supplied
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn get_by_user(&self, param: GetFavoritesParam) -> Result<Vec<Favorite>, AppError> {
        let user_id = self.require_user(param.user_id).await?;

        FavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await
    }

    /// Adds a planet or character to a user's favorites.
    ///
    /// # Arguments
    /// - `params` - User ID from the request body and target from the path
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(AppError::MissingParameter)` - No user ID supplied
    /// - `Err(AppError::NotFound)` - User or target does not exist
    /// - `Err(AppError::DuplicateFavorite)` - User already has this target as a favorite
    pub async fn add(&self, params: AddFavoriteParams) -> Result<Favorite, AppError> {
        let user_id = self.require_user(params.user_id).await?;
        let target = params.target;

        if !self.target_exists(target).await? {
            return Err(AppError::NotFound(target.not_found_message().to_string()));
        }

        let repo = FavoriteRepository::new(self.db);

        if repo.find_by_target(user_id, target).await?.is_some() {
            return Err(AppError::DuplicateFavorite(
                target.duplicate_message().to_string(),
            ));
        }

        // A concurrent add can pass the lookup above; the unique index catches it.
        let favorite = repo
            .create(user_id, target)
            .await
            .map_err(|err| duplicate_on_conflict(err, target))?;

        tracing::info!(
            "User {} added {} {} to favorites",
            user_id,
            target.kind(),
            target.id()
        );

        Ok(favorite)
    }

    /// Removes a planet or character from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(FavoriteTarget)` - Target of the removed favorite
    /// - `Err(AppError::MissingParameter)` - No user ID supplied
    /// - `Err(AppError::NotFound)` - User or favorite does not exist
    pub async fn remove(&self, params: RemoveFavoriteParams) -> Result<FavoriteTarget, AppError> {
        let user_id = self.require_user(params.user_id).await?;
        let target = params.target;

        let repo = FavoriteRepository::new(self.db);

        let favorite = repo
            .find_by_target(user_id, target)
            .await?
            .ok_or_else(|| AppError::NotFound(FAVORITE_NOT_FOUND.to_string()))?;

        // Deleted between lookup and delete by another request
        if !repo.delete(favorite.id).await? {
            return Err(AppError::NotFound(FAVORITE_NOT_FOUND.to_string()));
        }

        tracing::info!(
            "User {} removed {} {} from favorites",
            user_id,
            target.kind(),
            target.id()
        );

        Ok(target)
    }

    /// Resolves an optional user ID to one that exists in the database.
    async fn require_user(&self, user_id: Option<i32>) -> Result<i32, AppError> {
        let user_id =
            user_id.ok_or_else(|| AppError::MissingParameter(MISSING_USER_ID.to_string()))?;

        if !UserRepository::new(self.db).exists(user_id).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        Ok(user_id)
    }

    async fn target_exists(&self, target: FavoriteTarget) -> Result<bool, AppError> {
        let exists = match target {
            FavoriteTarget::Planet(id) => PlanetRepository::new(self.db).exists(id).await?,
            FavoriteTarget::Character(id) => CharacterRepository::new(self.db).exists(id).await?,
        };

        Ok(exists)
    }
}

/// Reports a unique-index violation on insert as `DuplicateFavorite`.
///
/// Any other error is returned unchanged.
fn duplicate_on_conflict(err: AppError, target: FavoriteTarget) -> AppError {
    match err {
        AppError::DbErr(db_err)
            if matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
        {
            AppError::DuplicateFavorite(target.duplicate_message().to_string())
        }
        err => err,
    }
}

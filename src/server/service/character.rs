use sea_orm::DatabaseConnection;

use crate::server::{
    data::character::CharacterRepository, error::AppError, model::character::Character,
};

pub const CHARACTER_NOT_FOUND: &str = "Personaje no encontrado";

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every character in ID order
    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        let repo = CharacterRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a character by ID, failing with `NotFound` if it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Character, AppError> {
        let repo = CharacterRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(CHARACTER_NOT_FOUND.to_string()))
    }
}

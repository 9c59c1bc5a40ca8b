use sea_orm::DatabaseConnection;

use crate::server::{data::planet::PlanetRepository, error::AppError, model::planet::Planet};

pub const PLANET_NOT_FOUND: &str = "Planeta no encontrado";

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every planet in ID order
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        let repo = PlanetRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a planet by ID, failing with `NotFound` if it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Planet, AppError> {
        let repo = PlanetRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(PLANET_NOT_FOUND.to_string()))
    }
}

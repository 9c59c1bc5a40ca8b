//! Planet factory for creating test planet entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test planets with customizable fields.
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    name: String,
    climate: Option<String>,
    terrain: Option<String>,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Planet {n}"` where n is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: None,
            name: format!("Planet {}", next_id()),
            climate: None,
            terrain: None,
        }
    }

    /// Forces a specific primary key instead of the auto-increment value.
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn climate(mut self, climate: impl Into<String>) -> Self {
        self.climate = Some(climate.into());
        self
    }

    pub fn terrain(mut self, terrain: impl Into<String>) -> Self {
        self.terrain = Some(terrain.into());
        self
    }

    /// Builds and inserts the planet entity into the database.
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            name: ActiveValue::Set(self.name),
            climate: ActiveValue::Set(self.climate),
            terrain: ActiveValue::Set(self.terrain),
            population: ActiveValue::Set(None),
            diameter: ActiveValue::Set(None),
            gravity: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}

//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
///
/// Descriptive attributes default to `None`; only the name is always populated.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    name: String,
    gender: Option<String>,
    birth_year: Option<String>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character {n}"` where n is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: None,
            name: format!("Character {}", next_id()),
            gender: None,
            birth_year: None,
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

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn birth_year(mut self, birth_year: impl Into<String>) -> Self {
        self.birth_year = Some(birth_year.into());
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            name: ActiveValue::Set(self.name),
            gender: ActiveValue::Set(self.gender),
            birth_year: ActiveValue::Set(self.birth_year),
            height: ActiveValue::Set(None),
            eye_color: ActiveValue::Set(None),
            hair_color: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}

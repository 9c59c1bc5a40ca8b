use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

use crate::server::model::character::Character;

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all characters ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Character::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

//! User domain model.
//!
//! Users are created outside this service; the backend only reads them. The
//! domain model has no password field, so the credential cannot reach a DTO.

use crate::model::user::UserDto;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
}

impl User {
    /// Converts an entity model to a user domain model, dropping the password.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// Only `id` and `email` are exposed.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
        }
    }
}

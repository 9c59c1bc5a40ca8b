use crate::model::character::CharacterDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
}

impl Character {
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            gender: entity.gender,
            birth_year: entity.birth_year,
            height: entity.height,
            eye_color: entity.eye_color,
            hair_color: entity.hair_color,
        }
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            gender: self.gender,
            birth_year: self.birth_year,
            height: self.height,
            eye_color: self.eye_color,
            hair_color: self.hair_color,
        }
    }
}

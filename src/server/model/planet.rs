use crate::model::planet::PlanetDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
    pub gravity: Option<String>,
}

impl Planet {
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            climate: entity.climate,
            terrain: entity.terrain,
            population: entity.population,
            diameter: entity.diameter,
            gravity: entity.gravity,
        }
    }

    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            climate: self.climate,
            terrain: self.terrain,
            population: self.population,
            diameter: self.diameter,
            gravity: self.gravity,
        }
    }
}

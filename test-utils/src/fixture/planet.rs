//! Fixture for planet test data.

use entity::planet;

/// Creates a fully populated planet entity model.
pub fn entity() -> planet::Model {
    planet::Model {
        id: 1,
        name: "Tatooine".to_string(),
        climate: Some("arid".to_string()),
        terrain: Some("desert".to_string()),
        population: Some("200000".to_string()),
        diameter: Some("10465".to_string()),
        gravity: Some("1 standard".to_string()),
    }
}

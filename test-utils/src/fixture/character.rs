//! Fixture for character test data.

use entity::character;

/// Creates a fully populated character entity model.
pub fn entity() -> character::Model {
    character::Model {
        id: 1,
        name: "Luke Skywalker".to_string(),
        gender: Some("male".to_string()),
        birth_year: Some("19BBY".to_string()),
        height: Some("172".to_string()),
        eye_color: Some("blue".to_string()),
        hair_color: Some("blond".to_string()),
    }
}

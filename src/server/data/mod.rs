//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table. Repositories use SeaORM entity models internally and return domain models
//! to keep the entity boundary out of the service and controller layers.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

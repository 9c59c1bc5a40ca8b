//! SeaORM entity models for the catalog tables.
//!
//! One module per table. `prelude` re-exports each `Entity` under the table's
//! type name so callers can write `entity::prelude::Favorite::find()`.

pub mod prelude;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

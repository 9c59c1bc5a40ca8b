//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit-testing domain conversions and DTO serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//! let malformed = fixture::favorite::entity_builder()
//!     .planet_id(Some(3))
//!     .character_id(Some(4))
//!     .build();
//! ```

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

pub use character::entity as character_entity;
pub use favorite::{entity as favorite_entity, entity_builder as favorite_entity_builder};
pub use planet::entity as planet_entity;
pub use user::{entity as user_entity, entity_builder as user_entity_builder};

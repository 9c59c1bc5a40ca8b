//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let planet = factory::create_planet(&db).await?;
//! let favorite = factory::create_favorite_planet(&db, user.id, planet.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("leia@alderaan.gov")
//!     .is_active(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `character` - Create character entities
//! - `planet` - Create planet entities
//! - `favorite` - Create favorite entities for a planet or a character
//! - `helpers` - ID generation and multi-entity helpers

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod user;

pub use character::create_character;
pub use favorite::{create_favorite_character, create_favorite_planet};
pub use planet::create_planet;
pub use user::create_user;

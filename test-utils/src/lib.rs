//! Holonet Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the holonet
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories that insert rows with sensible defaults, and fixtures that
//! build entity models without touching a database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert users, characters, planets and favorites
//! - **fixture**: In-memory entity models
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_favorites() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_migrations().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let planet = factory::create_planet(db).await?;
//!     factory::create_favorite_planet(db, user.id, planet.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;

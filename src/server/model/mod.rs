//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. They keep database column
//! layout and API shape out of the service layer.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

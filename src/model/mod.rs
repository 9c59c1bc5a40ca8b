//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON shape of every request and response. Server-side
//! domain models convert into them at the controller boundary.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

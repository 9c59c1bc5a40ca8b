//! HTTP request handlers.
//!
//! Controllers extract path, query, and body values, convert DTOs into parameter
//! models, call the matching service, and convert the domain result back into a DTO.
//! Errors bubble up as `AppError` and are rendered by its `IntoResponse` impl.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

#[cfg(test)]
mod test;

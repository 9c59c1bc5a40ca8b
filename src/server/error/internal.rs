use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored favorite row references both a planet and a character, or neither.
    ///
    /// Rows written by the service always carry exactly one target, so this points
    /// at data inserted outside the application. Results in a 500 Internal Server
    /// Error with a generic message returned to client.
    #[error(
        "Favorite {id} must reference exactly one target (planet_id: {planet_id:?}, character_id: {character_id:?})"
    )]
    MalformedFavorite {
        /// Primary key of the offending row
        id: i32,
        /// Stored planet reference
        planet_id: Option<i32>,
        /// Stored character reference
        character_id: Option<i32>,
    },
}

//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to build unique emails and names so repeated factory calls never collide
/// on unique columns.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with one planet and one character.
///
/// Convenience for favorites tests that need a user plus a target of each kind.
///
/// # Returns
/// - `Ok((user, planet, character))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_targets(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::planet::Model,
        entity::character::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let planet = crate::factory::planet::create_planet(db).await?;
    let character = crate::factory::character::create_character(db).await?;

    Ok((user, planet, character))
}

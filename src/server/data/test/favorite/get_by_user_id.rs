use super::*;

/// Tests listing favorites of both kinds for one user.
///
/// Verifies that planet and character favorites are returned in insertion order
/// and that favorites owned by other users are excluded.
///
/// Expected: Ok(Vec<Favorite>) with two entries
#[tokio::test]
async fn returns_only_favorites_of_user_in_id_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, character) = factory::helpers::create_user_with_targets(db).await?;
    let other_user = factory::create_user(db).await?;

    factory::create_favorite_planet(db, user.id, planet.id).await?;
    factory::create_favorite_planet(db, other_user.id, planet.id).await?;
    factory::create_favorite_character(db, user.id, character.id).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user_id(user.id).await?;

    assert_eq!(favorites.len(), 2);
    assert!(favorites[0].id < favorites[1].id);
    assert_eq!(favorites[0].target, FavoriteTarget::Planet(planet.id));
    assert_eq!(favorites[1].target, FavoriteTarget::Character(character.id));
    assert!(favorites.iter().all(|favorite| favorite.user_id == user.id));

    Ok(())
}

/// Tests listing favorites for a user without any.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_user_without_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user_id(user.id).await?;

    assert!(favorites.is_empty());

    Ok(())
}

/// Tests that a stored row without any target fails conversion.
///
/// Expected: Err(AppError::InternalErr(MalformedFavorite))
#[tokio::test]
async fn fails_on_row_without_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let orphan = factory::favorite::FavoriteFactory::new(db, user.id)
        .build()
        .await?;

    let repo = FavoriteRepository::new(db);
    let result = repo.get_by_user_id(user.id).await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::MalformedFavorite { id, .. })) if id == orphan.id
    ));

    Ok(())
}

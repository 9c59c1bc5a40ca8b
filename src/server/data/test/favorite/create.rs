use super::*;

/// Tests inserting a planet favorite.
///
/// Verifies that only the planet column is set on the stored row.
///
/// Expected: Ok(Favorite) with planet target
#[tokio::test]
async fn creates_planet_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, _) = factory::helpers::create_user_with_targets(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorite = repo
        .create(user.id, FavoriteTarget::Planet(planet.id))
        .await?;

    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.target, FavoriteTarget::Planet(planet.id));

    let stored = repo.get_by_user_id(user.id).await?;
    assert_eq!(stored, vec![favorite]);

    Ok(())
}

#[tokio::test]
async fn creates_character_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, character) = factory::helpers::create_user_with_targets(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorite = repo
        .create(user.id, FavoriteTarget::Character(character.id))
        .await?;

    assert_eq!(favorite.target, FavoriteTarget::Character(character.id));

    Ok(())
}

/// Tests that a favorite referencing a missing user is rejected by the foreign key.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);
    let result = repo.create(999, FavoriteTarget::Planet(planet.id)).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests that inserting the same (user, planet) pair twice hits the unique index.
///
/// Expected: Err(AppError::DbErr) carrying a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_pair_at_insert() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, _) = factory::helpers::create_user_with_targets(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.create(user.id, FavoriteTarget::Planet(planet.id)).await?;
    let result = repo.create(user.id, FavoriteTarget::Planet(planet.id)).await;

    assert!(matches!(
        result,
        Err(AppError::DbErr(ref err))
            if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    ));
    assert_eq!(repo.get_by_user_id(user.id).await?.len(), 1);

    Ok(())
}

/// Tests that two users may favorite the same planet and one user may favorite
/// a planet and a character sharing an ID.
#[tokio::test]
async fn allows_same_target_for_different_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other_user = factory::create_user(db).await?;
    factory::planet::PlanetFactory::new(db).id(8).build().await?;
    factory::character::CharacterFactory::new(db)
        .id(8)
        .build()
        .await?;

    let repo = FavoriteRepository::new(db);
    repo.create(user.id, FavoriteTarget::Planet(8)).await?;
    repo.create(other_user.id, FavoriteTarget::Planet(8)).await?;
    repo.create(user.id, FavoriteTarget::Character(8)).await?;

    assert_eq!(repo.get_by_user_id(user.id).await?.len(), 2);

    Ok(())
}

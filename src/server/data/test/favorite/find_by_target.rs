use super::*;

#[tokio::test]
async fn finds_planet_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, _) = factory::helpers::create_user_with_targets(db).await?;
    let created = factory::create_favorite_planet(db, user.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);
    let found = repo
        .find_by_target(user.id, FavoriteTarget::Planet(planet.id))
        .await?;

    assert_eq!(found.map(|favorite| favorite.id), Some(created.id));

    Ok(())
}

/// Tests that a planet favorite does not match a character with the same ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_match_other_target_kind() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::planet::PlanetFactory::new(db).id(4).build().await?;
    factory::character::CharacterFactory::new(db)
        .id(4)
        .build()
        .await?;
    factory::create_favorite_planet(db, user.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);
    let found = repo
        .find_by_target(user.id, FavoriteTarget::Character(4))
        .await?;

    assert!(found.is_none());

    Ok(())
}

#[tokio::test]
async fn does_not_match_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, character) = factory::helpers::create_user_with_targets(db).await?;
    let other_user = factory::create_user(db).await?;
    factory::create_favorite_character(db, other_user.id, character.id).await?;

    let repo = FavoriteRepository::new(db);
    let found = repo
        .find_by_target(user.id, FavoriteTarget::Character(character.id))
        .await?;

    assert!(found.is_none());

    Ok(())
}

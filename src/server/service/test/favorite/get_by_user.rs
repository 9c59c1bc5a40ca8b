use super::*;

/// Tests listing favorites without a user ID.
///
/// Expected: Err(AppError::MissingParameter)
#[tokio::test]
async fn fails_without_user_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FavoriteService::new(db)
        .get_by_user(GetFavoritesParam { user_id: None })
        .await;

    assert!(matches!(
        result,
        Err(AppError::MissingParameter(ref msg)) if msg == "Se requiere el ID del usuario"
    ));

    Ok(())
}

/// Expected: Err(AppError::NotFound("Usuario no encontrado"))
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FavoriteService::new(db)
        .get_by_user(GetFavoritesParam { user_id: Some(999) })
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(ref msg)) if msg == "Usuario no encontrado"
    ));

    Ok(())
}

#[tokio::test]
async fn returns_stored_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, character) = factory::helpers::create_user_with_targets(db).await?;
    factory::create_favorite_character(db, user.id, character.id).await?;
    factory::create_favorite_planet(db, user.id, planet.id).await?;

    let favorites = FavoriteService::new(db)
        .get_by_user(GetFavoritesParam {
            user_id: Some(user.id),
        })
        .await?;

    let targets: Vec<FavoriteTarget> = favorites.iter().map(|favorite| favorite.target).collect();
    assert_eq!(
        targets,
        vec![
            FavoriteTarget::Character(character.id),
            FavoriteTarget::Planet(planet.id)
        ]
    );

    Ok(())
}

/// Tests that a stored row with both targets set is reported, not reinterpreted.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_malformed_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, character) = factory::helpers::create_user_with_targets(db).await?;
    factory::favorite::FavoriteFactory::new(db, user.id)
        .planet_id(planet.id)
        .character_id(character.id)
        .build()
        .await?;

    let result = FavoriteService::new(db)
        .get_by_user(GetFavoritesParam {
            user_id: Some(user.id),
        })
        .await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}

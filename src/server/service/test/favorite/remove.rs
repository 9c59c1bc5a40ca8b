use super::*;

/// Tests that removing an added favorite empties the list and a second remove fails.
///
/// Expected: first remove Ok, list empty, second remove Err(AppError::NotFound)
#[tokio::test]
async fn remove_after_add_empties_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, _) = factory::helpers::create_user_with_targets(db).await?;
    let target = FavoriteTarget::Planet(planet.id);

    let service = FavoriteService::new(db);
    service
        .add(AddFavoriteParams {
            user_id: Some(user.id),
            target,
        })
        .await?;

    let params = RemoveFavoriteParams {
        user_id: Some(user.id),
        target,
    };

    let removed = service.remove(params.clone()).await?;
    assert_eq!(removed, target);

    let favorites = service
        .get_by_user(GetFavoritesParam {
            user_id: Some(user.id),
        })
        .await?;
    assert!(favorites.is_empty());

    let second = service.remove(params).await;
    assert!(matches!(
        second,
        Err(AppError::NotFound(ref msg)) if msg == "Favorito no encontrado"
    ));

    Ok(())
}

/// Tests that removing a character favorite leaves planet favorites untouched.
#[tokio::test]
async fn removes_only_matching_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, character) = factory::helpers::create_user_with_targets(db).await?;
    factory::create_favorite_planet(db, user.id, planet.id).await?;
    factory::create_favorite_character(db, user.id, character.id).await?;

    let service = FavoriteService::new(db);
    service
        .remove(RemoveFavoriteParams {
            user_id: Some(user.id),
            target: FavoriteTarget::Character(character.id),
        })
        .await?;

    let favorites = service
        .get_by_user(GetFavoritesParam {
            user_id: Some(user.id),
        })
        .await?;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].target, FavoriteTarget::Planet(planet.id));

    Ok(())
}

#[tokio::test]
async fn fails_without_user_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FavoriteService::new(db)
        .remove(RemoveFavoriteParams {
            user_id: None,
            target: FavoriteTarget::Planet(1),
        })
        .await;

    assert!(matches!(result, Err(AppError::MissingParameter(_))));

    Ok(())
}

#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FavoriteService::new(db)
        .remove(RemoveFavoriteParams {
            user_id: Some(31),
            target: FavoriteTarget::Planet(1),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(ref msg)) if msg == "Usuario no encontrado"
    ));

    Ok(())
}

use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Tests that adding a planet favorite makes it appear exactly once in the list.
///
/// Expected: Ok(Favorite), list contains one matching entry
#[tokio::test]
async fn added_planet_appears_once_in_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, _) = factory::helpers::create_user_with_targets(db).await?;

    let service = FavoriteService::new(db);
    let favorite = service
        .add(AddFavoriteParams {
            user_id: Some(user.id),
            target: FavoriteTarget::Planet(planet.id),
        })
        .await?;

    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.target, FavoriteTarget::Planet(planet.id));

    let favorites = service
        .get_by_user(GetFavoritesParam {
            user_id: Some(user.id),
        })
        .await?;

    let matching = favorites
        .iter()
        .filter(|stored| stored.target == FavoriteTarget::Planet(planet.id))
        .count();
    assert_eq!(matching, 1);
    assert_eq!(favorites[0].id, favorite.id);

    Ok(())
}

#[tokio::test]
async fn adds_character_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, character) = factory::helpers::create_user_with_targets(db).await?;

    let favorite = FavoriteService::new(db)
        .add(AddFavoriteParams {
            user_id: Some(user.id),
            target: FavoriteTarget::Character(character.id),
        })
        .await?;

    assert_eq!(favorite.target, FavoriteTarget::Character(character.id));

    Ok(())
}

/// Tests adding the same planet twice.
///
/// Expected: Err(AppError::DuplicateFavorite) on the second add
#[tokio::test]
async fn rejects_duplicate_planet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, _) = factory::helpers::create_user_with_targets(db).await?;

    let service = FavoriteService::new(db);
    let params = AddFavoriteParams {
        user_id: Some(user.id),
        target: FavoriteTarget::Planet(planet.id),
    };

    service.add(params.clone()).await?;
    let result = service.add(params).await;

    assert!(matches!(
        result,
        Err(AppError::DuplicateFavorite(ref msg))
            if msg == "El planeta ya está en los favoritos del usuario"
    ));

    let favorites = service
        .get_by_user(GetFavoritesParam {
            user_id: Some(user.id),
        })
        .await?;
    assert_eq!(favorites.len(), 1);

    Ok(())
}

#[tokio::test]
async fn rejects_duplicate_character() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, character) = factory::helpers::create_user_with_targets(db).await?;
    factory::create_favorite_character(db, user.id, character.id).await?;

    let result = FavoriteService::new(db)
        .add(AddFavoriteParams {
            user_id: Some(user.id),
            target: FavoriteTarget::Character(character.id),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::DuplicateFavorite(ref msg))
            if msg == "El personaje ya está en los favoritos del usuario"
    ));

    Ok(())
}

/// Tests adding a character favorite for a user that does not exist.
///
/// Expected: Err(AppError::NotFound("Usuario no encontrado")) and no row created
#[tokio::test]
async fn unknown_user_creates_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;

    let result = FavoriteService::new(db)
        .add(AddFavoriteParams {
            user_id: Some(999),
            target: FavoriteTarget::Character(character.id),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(ref msg)) if msg == "Usuario no encontrado"
    ));

    let count = entity::prelude::Favorite::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

#[tokio::test]
async fn fails_without_user_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let result = FavoriteService::new(db)
        .add(AddFavoriteParams {
            user_id: None,
            target: FavoriteTarget::Planet(planet.id),
        })
        .await;

    assert!(matches!(result, Err(AppError::MissingParameter(_))));

    Ok(())
}

/// Tests that the user check runs before the target check.
///
/// Expected: Err(AppError::NotFound("Usuario no encontrado")) even though the planet is missing too
#[tokio::test]
async fn reports_unknown_user_before_unknown_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FavoriteService::new(db)
        .add(AddFavoriteParams {
            user_id: Some(1),
            target: FavoriteTarget::Planet(1),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(ref msg)) if msg == "Usuario no encontrado"
    ));

    Ok(())
}

#[tokio::test]
async fn fails_for_unknown_planet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = FavoriteService::new(db)
        .add(AddFavoriteParams {
            user_id: Some(user.id),
            target: FavoriteTarget::Planet(404),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(ref msg)) if msg == "Planeta no encontrado"
    ));

    Ok(())
}

#[tokio::test]
async fn fails_for_unknown_character() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = FavoriteService::new(db)
        .add(AddFavoriteParams {
            user_id: Some(user.id),
            target: FavoriteTarget::Character(404),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(ref msg)) if msg == "Personaje no encontrado"
    ));

    Ok(())
}

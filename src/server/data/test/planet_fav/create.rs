use super::*;

/// Tests creating a planet favorite link.
///
/// Expected: Ok with link referencing both rows
#[tokio::test]
async fn creates_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = PlanetFavRepository::new(db);
    let link = repo.create(user.id, planet.id).await?;

    assert_eq!(link.user_id, user.id);
    assert_eq!(link.planet_id, planet.id);

    Ok(())
}

/// Tests inserting the same (user, planet) pair twice.
///
/// Verifies that the composite unique index rejects the second insert.
///
/// Expected: Err(DbErr) classified as a unique violation, one link stored
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = PlanetFavRepository::new(db);
    repo.create(user.id, planet.id).await?;

    let result = repo.create(user.id, planet.id).await;

    assert!(result.is_err());
    assert!(is_unique_violation(&result.unwrap_err()));
    assert_eq!(repo.get_by_user_id(user.id).await?.len(), 1);

    Ok(())
}

/// Tests that the same planet can be favorited by different users.
///
/// Expected: Ok for both users
#[tokio::test]
async fn allows_same_planet_for_different_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let luke = factory::create_user(db).await?;
    let leia = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = PlanetFavRepository::new(db);

    assert!(repo.create(luke.id, planet.id).await.is_ok());
    assert!(repo.create(leia.id, planet.id).await.is_ok());

    Ok(())
}

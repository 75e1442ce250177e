use super::*;

/// Tests deleting a planet link.
///
/// Verifies that only the targeted link is removed and the planet row remains.
///
/// Expected: Ok with one row affected
#[tokio::test]
async fn deletes_link_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let other = factory::create_planet(db).await?;
    let link = factory::create_planet_fav(db, user.id, planet.id).await?;
    factory::create_planet_fav(db, user.id, other.id).await?;

    let repo = PlanetFavRepository::new(db);
    let result = repo.delete(link.id).await?;

    assert_eq!(result.rows_affected, 1);
    let remaining = repo.get_by_user_id(user.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].planet_id, other.id);

    let planet_repo = crate::server::data::planet::PlanetRepository::new(db);
    assert!(planet_repo.find_by_id(planet.id).await?.is_some());

    Ok(())
}

/// Tests deleting a link id that does not exist.
///
/// Expected: Ok with zero rows affected
#[tokio::test]
async fn reports_zero_rows_for_missing_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetFavRepository::new(db);
    let result = repo.delete(99).await?;

    assert_eq!(result.rows_affected, 0);

    Ok(())
}

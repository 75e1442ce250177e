use super::*;

/// Tests resolving a user's favorite planets.
///
/// Expected: Ok with full planet rows in link order
#[tokio::test]
async fn resolves_planets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let hoth = factory::planet::create_planet_named(db, "Hoth").await?;
    let endor = factory::planet::create_planet_named(db, "Endor").await?;
    factory::create_planet_fav(db, user.id, endor.id).await?;
    factory::create_planet_fav(db, user.id, hoth.id).await?;

    let repo = PlanetFavRepository::new(db);
    let planets = repo.get_planets_by_user_id(user.id).await?;

    let names: Vec<&str> = planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Endor", "Hoth"]);

    Ok(())
}

/// Tests resolving favorites for a user without any.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_planet(db).await?;

    let repo = PlanetFavRepository::new(db);

    assert!(repo.get_planets_by_user_id(user.id).await?.is_empty());

    Ok(())
}

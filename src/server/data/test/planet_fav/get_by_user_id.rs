use super::*;

/// Tests listing a user's planet links.
///
/// Verifies only the requested user's links are returned, oldest first.
///
/// Expected: Ok with the user's two links in insertion order
#[tokio::test]
async fn lists_only_users_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_planet(db).await?;
    let second = factory::create_planet(db).await?;
    factory::create_planet_fav(db, user.id, second.id).await?;
    factory::create_planet_fav(db, other.id, first.id).await?;
    factory::create_planet_fav(db, user.id, first.id).await?;

    let repo = PlanetFavRepository::new(db);
    let links = repo.get_by_user_id(user.id).await?;

    let planet_ids: Vec<i32> = links.iter().map(|l| l.planet_id).collect();
    assert_eq!(planet_ids, vec![second.id, first.id]);
    assert!(links.iter().all(|l| l.user_id == user.id));

    Ok(())
}

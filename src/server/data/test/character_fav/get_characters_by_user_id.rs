use super::*;

/// Tests resolving a user's favorite characters.
///
/// Expected: Ok with full character rows in link order
#[tokio::test]
async fn resolves_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let yoda = factory::character::CharacterFactory::new(db)
        .name("Yoda")
        .build()
        .await?;
    let r2 = factory::character::CharacterFactory::new(db)
        .name("R2-D2")
        .build()
        .await?;
    factory::create_character_fav(db, user.id, r2.id).await?;
    factory::create_character_fav(db, user.id, yoda.id).await?;

    let repo = CharacterFavRepository::new(db);
    let characters = repo.get_characters_by_user_id(user.id).await?;

    let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["R2-D2", "Yoda"]);

    Ok(())
}

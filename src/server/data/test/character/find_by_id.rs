use super::*;

/// Tests finding a character with a nested data payload.
///
/// Expected: Ok(Some) with the JSON payload unchanged
#[tokio::test]
async fn finds_character_with_data() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let data = json!({ "species": "Wookiee", "films": [1, 2, 3] });
    let created = factory::character::CharacterFactory::new(db)
        .name("Chewbacca")
        .image("chewie.png")
        .data(data.clone())
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let character = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(character.name, "Chewbacca");
    assert_eq!(character.image.as_deref(), Some("chewie.png"));
    assert_eq!(character.data, data);

    Ok(())
}

/// Tests finding a character id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);

    assert!(repo.find_by_id(7).await?.is_none());

    Ok(())
}

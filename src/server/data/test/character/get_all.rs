use super::*;

/// Tests listing characters.
///
/// Expected: Ok with characters in id order
#[tokio::test]
async fn lists_characters_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::create_character(db).await?;
    let second = factory::create_character(db).await?;

    let repo = CharacterRepository::new(db);
    let characters = repo.get_all().await?;

    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0].id, first.id);
    assert_eq!(characters[1].id, second.id);

    Ok(())
}

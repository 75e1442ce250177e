use super::*;

/// Tests inserting the same (user, character) pair twice.
///
/// Expected: first insert Ok, second Err(DbErr) classified as a unique violation
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let repo = CharacterFavRepository::new(db);
    let link = repo.create(user.id, character.id).await?;
    assert_eq!(link.character_id, character.id);

    let result = repo.create(user.id, character.id).await;

    assert!(result.is_err());
    assert!(is_unique_violation(&result.unwrap_err()));
    assert_eq!(repo.get_by_user_id(user.id).await?.len(), 1);

    Ok(())
}

use super::*;

/// Tests deleting a character link.
///
/// Expected: Ok with one row affected and no links left
#[tokio::test]
async fn deletes_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let link = factory::create_character_fav(db, user.id, character.id).await?;

    let repo = CharacterFavRepository::new(db);
    let result = repo.delete(link.id).await?;

    assert_eq!(result.rows_affected, 1);
    assert!(repo.get_by_user_id(user.id).await?.is_empty());

    Ok(())
}

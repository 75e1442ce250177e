use super::*;

/// Tests listing users.
///
/// Verifies users are returned in id order regardless of name.
///
/// Expected: Ok with all users sorted by id
#[tokio::test]
async fn lists_users_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let zed = factory::user::UserFactory::new(db).name("Zed").build().await?;
    let amy = factory::user::UserFactory::new(db).name("Amy").build().await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![zed.id, amy.id]);

    Ok(())
}

/// Tests listing users on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

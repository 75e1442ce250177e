use super::*;

/// Tests looking a user up by email.
///
/// Verifies that only an exact match is returned.
///
/// Expected: Ok(Some) for the registered email, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_exact_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .email("leia@alderaan.gov")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("leia@alderaan.gov").await?;
    assert_eq!(found.map(|u| u.email), Some("leia@alderaan.gov".to_string()));
    assert!(repo.find_by_email("han@falcon.net").await?.is_none());

    Ok(())
}

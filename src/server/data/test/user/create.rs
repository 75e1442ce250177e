use super::*;
use crate::server::data::is_unique_violation;

/// Tests creating a new user.
///
/// Verifies that the user repository inserts the user as active with the
/// provided registration date.
///
/// Expected: Ok with user created and is_active set to true
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(new_user("a@x.com")).await?;

    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.name, "A");
    assert!(user.is_active);
    assert_eq!(
        user.date_register,
        NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()
    );

    Ok(())
}

/// Tests inserting a second user with the same email.
///
/// Verifies that the unique email index rejects the insert and that the error is
/// recognised as a unique violation.
///
/// Expected: Err(DbErr) classified as a unique violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(new_user("a@x.com")).await?;

    let result = repo.create(new_user("a@x.com")).await;

    assert!(result.is_err());
    assert!(is_unique_violation(&result.unwrap_err()));
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

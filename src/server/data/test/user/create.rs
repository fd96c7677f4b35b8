use super::*;

/// Tests creating a new user.
///
/// Verifies that the user repository stores the username and password hash
/// exactly as given.
///
/// Expected: Ok with a persisted user
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create("default_user".to_string(), "$argon2id$stub".to_string())
        .await?;

    assert_eq!(user.username, "default_user");
    assert_eq!(user.password_hash, "$argon2id$stub");
    assert!(repo.find_by_id(user.id).await?.is_some());

    Ok(())
}

/// Tests the unique username constraint.
///
/// Verifies that creating a second user with an existing username fails
/// instead of silently replacing the first account.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("default_user")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create("default_user".to_string(), "other".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}

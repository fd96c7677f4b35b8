use super::*;

/// Tests finding a user by username.
///
/// Verifies that lookup matches the exact username and ignores other users.
///
/// Expected: Ok(Some(User)) for the requested username
#[tokio::test]
async fn finds_user_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    let target = factory::user::UserFactory::new(db)
        .username("default_user")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("default_user").await?.unwrap();

    assert_eq!(user.id, target.id);

    Ok(())
}

/// Tests looking up a username that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("nobody").await?;

    assert!(user.is_none());

    Ok(())
}

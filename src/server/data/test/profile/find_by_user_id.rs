use super::*;

/// Tests reading a stored profile.
///
/// Expected: Ok(Some(Profile)) with lists decoded from JSON
#[tokio::test]
async fn finds_stored_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::user_profile::UserProfileFactory::new(db, user.id)
        .studying_topics(&["rust", "databases"])
        .daily_hours_target(4.0)
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    let profile = repo.find_by_user_id(user.id).await?.unwrap();

    assert_eq!(profile.studying_topics, vec!["rust", "databases"]);
    assert!(profile.focus_areas.is_empty());
    assert_eq!(profile.daily_hours_target, Some(4.0));
    assert!(profile.created_at.is_some());

    Ok(())
}

/// Tests reading the profile of a user who never saved one.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ProfileRepository::new(db);
    let profile = repo.find_by_user_id(user.id).await?;

    assert!(profile.is_none());

    Ok(())
}

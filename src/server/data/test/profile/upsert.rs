use super::*;

/// Tests creating a profile on first write.
///
/// Verifies that onboarding_completed defaults to false when not given.
///
/// Expected: Ok with provided fields stored and others empty
#[tokio::test]
async fn creates_profile_on_first_write() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ProfileRepository::new(db);
    let profile = repo
        .upsert(
            user.id,
            ProfilePatch {
                goals: Some("Pass the exam".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(profile.user_id, user.id);
    assert_eq!(profile.goals.as_deref(), Some("Pass the exam"));
    assert!(profile.studying_topics.is_empty());
    assert!(!profile.onboarding_completed);

    Ok(())
}

/// Tests updating only goals on an existing profile.
///
/// Verifies that focus areas, topics, target and onboarding flag keep their
/// stored values when absent from the write.
///
/// Expected: Ok with goals replaced and everything else unchanged
#[tokio::test]
async fn keeps_absent_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::user_profile::UserProfileFactory::new(db, user.id)
        .studying_topics(&["rust"])
        .goals("Old goal")
        .focus_areas(&["ownership", "async"])
        .daily_hours_target(3.0)
        .onboarding_completed(true)
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    let profile = repo
        .upsert(
            user.id,
            ProfilePatch {
                goals: Some("New goal".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(profile.goals.as_deref(), Some("New goal"));
    assert_eq!(profile.focus_areas, vec!["ownership", "async"]);
    assert_eq!(profile.studying_topics, vec!["rust"]);
    assert_eq!(profile.daily_hours_target, Some(3.0));
    assert!(profile.onboarding_completed);

    Ok(())
}

/// Tests that repeated writes keep a single profile row.
///
/// Expected: Ok with one row in user_profile
#[tokio::test]
async fn keeps_single_row() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ProfileRepository::new(db);
    for completed in [false, true] {
        repo.upsert(
            user.id,
            ProfilePatch {
                onboarding_completed: Some(completed),
                ..Default::default()
            },
        )
        .await?;
    }

    assert_eq!(entity::prelude::UserProfile::find().count(db).await?, 1);

    Ok(())
}

/// Tests two first writes for the same user issued concurrently.
///
/// Verifies that neither write fails on the user_id key and that the
/// fields of both patches end up in the single stored row.
///
/// Expected: Ok for both writes, goals and focus areas both stored
#[tokio::test]
async fn concurrent_first_writes_merge() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ProfileRepository::new(db);
    let (first, second) = tokio::join!(
        repo.upsert(
            user.id,
            ProfilePatch {
                goals: Some("Finish the thesis".to_string()),
                ..Default::default()
            },
        ),
        repo.upsert(
            user.id,
            ProfilePatch {
                focus_areas: Some(vec!["writing".to_string()]),
                ..Default::default()
            },
        ),
    );
    first?;
    second?;

    let stored = repo.find_by_user_id(user.id).await?.unwrap();
    assert_eq!(stored.goals.as_deref(), Some("Finish the thesis"));
    assert_eq!(stored.focus_areas, vec!["writing".to_string()]);
    assert!(!stored.onboarding_completed);

    Ok(())
}

use super::*;

/// Tests the daily summary for a day with no planned hours.
///
/// Expected: 200 with zero totals and completionPercentage 0
#[tokio::test]
async fn daily_without_tasks_reports_zero_completion() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/analytics/daily?date=2026-03-14").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2026-03-14");
    assert_eq!(body["totalTasks"], 0);
    assert_eq!(body["completionPercentage"], 0);
}

/// Tests the daily summary after completing part of the planned work.
///
/// Expected: completionPercentage rounded from actual over planned hours
#[tokio::test]
async fn daily_reports_completion_from_hours() {
    let app = TestApp::new().await;

    let (_, task) = app
        .post(
            "/api/tasks",
            json!({
                "title": "Problem set",
                "category": "math",
                "planned_hours": 4.0,
                "task_date": "2026-03-14"
            }),
        )
        .await;
    app.put(
        &format!("/api/tasks/{}", task["id"]),
        json!({ "actual_hours": 3.0, "status": "partial" }),
    )
    .await;

    let (_, body) = app.get("/api/analytics/daily?date=2026-03-14").await;

    assert_eq!(body["partialTasks"], 1);
    assert_eq!(body["completionPercentage"], 75);
}

/// Tests the monthly breakdown with a malformed month.
///
/// Expected: 400
#[tokio::test]
async fn monthly_rejects_invalid_month() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/api/analytics/monthly?month=2026-13").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests the weekly breakdown with an explicit start date.
///
/// Expected: 200 echoing startDate with per-category stats
#[tokio::test]
async fn weekly_groups_by_category() {
    let app = TestApp::new().await;

    for (title, category) in [("Proofs", "math"), ("Vocab", "language")] {
        app.post(
            "/api/tasks",
            json!({
                "title": title,
                "category": category,
                "planned_hours": 1.0,
                "task_date": "2026-03-10"
            }),
        )
        .await;
    }

    let (status, body) = app.get("/api/analytics/weekly?startDate=2026-03-09").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["startDate"], "2026-03-09");
    assert_eq!(body["categoryStats"].as_array().unwrap().len(), 2);
}

/// Tests recording a day's totals and reading the streak back.
///
/// Verifies that a second update for the same date replaces the totals.
///
/// Expected: one history row with the latest hours
#[tokio::test]
async fn streak_update_overwrites_day() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/analytics/streak/update",
            json!({ "date": "2026-03-14", "hours": 2.0, "taskCount": 1 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Streak updated successfully");

    app.post(
        "/api/analytics/streak/update",
        json!({ "date": "2026-03-14", "hours": 5.0, "taskCount": 3 }),
    )
    .await;

    let (status, streak) = app.get("/api/analytics/streak").await;

    assert_eq!(status, StatusCode::OK);
    let history = streak["streakHistory"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["hours_completed"], 5.0);
    assert_eq!(history[0]["tasks_completed"], 3);
}

/// Tests recording a streak day without a date.
///
/// Expected: 400
#[tokio::test]
async fn streak_update_requires_date() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post("/api/analytics/streak/update", json!({ "hours": 1.0 }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

//! Integration tests for the saved-stories endpoints.

mod common;

use axum::http::StatusCode;
use chrono::DateTime;
use common::{body_json, get, post_json};
use fable_db::repositories::{PromptCacheRepo, StoryRepo};
use sqlx::SqlitePool;

async fn seed_story(pool: &SqlitePool, key: i64, story: &str, video_url: &str) {
    let created_at = DateTime::from_timestamp_millis(key).expect("valid test timestamp");
    StoryRepo::save_with_key(pool, key, created_at, story, video_url)
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Test: empty store lists as an empty array
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_stories_empty(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/stories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Test: saved stories list newest first with display previews
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_stories_newest_first_with_previews(pool: SqlitePool) {
    let long_story = format!("Title: The Dragon {}", "and on it goes ".repeat(20));
    seed_story(&pool, 1_000, "A short tale.", "https://video/1.mp4").await;
    seed_story(&pool, 2_000, &long_story, "https://video/2.mp4").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/stories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 2);

    // Newest first.
    assert_eq!(entries[0]["key"], 2_000);
    assert_eq!(entries[1]["key"], 1_000);

    // Previews strip the title marker and cut long stories down.
    let preview = entries[0]["preview"].as_str().unwrap();
    assert!(!preview.contains("Title"));
    assert!(preview.ends_with("..."));
    assert!(preview.chars().count() <= 53);

    // Short stories appear whole.
    assert_eq!(entries[1]["preview"], "A short tale.");

    // The full story text stays out of the list payload.
    assert!(entries[0]["story"].is_null());
}

// ---------------------------------------------------------------------------
// Test: fetching one story returns the full record; missing keys 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_story_roundtrip(pool: SqlitePool) {
    seed_story(&pool, 1_000, "Once upon a time...", "https://video/abc.mp4").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/stories/1000").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["key"], 1_000);
    assert_eq!(json["data"]["story"], "Once upon a time...");
    assert_eq!(json["data"]["video_url"], "https://video/abc.mp4");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_story_missing_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/stories/99999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: narrating an empty story is rejected before any vendor call
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn narrate_empty_story_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/stories/narrate",
        serde_json::json!({ "story": "   " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: prompt prefill cache
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn cached_prompt_starts_null(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/prompt").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["prompt"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cached_prompt_returns_latest(pool: SqlitePool) {
    PromptCacheRepo::set(&pool, "a dragon who can't breathe fire")
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/prompt").await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["prompt"], "a dragon who can't breathe fire");
}

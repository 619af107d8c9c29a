//! Saved stories and story generation.
//!
//! ```text
//! GET  /stories            list_stories
//! GET  /stories/{key}      get_story
//! POST /stories/generate   generate_story
//! GET  /prompt             get_cached_prompt
//! ```

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use fable_core::error::CoreError;
use fable_core::story::story_preview;
use fable_core::types::{DbId, Timestamp};
use fable_db::models::story::StoryRecord;
use fable_db::repositories::{PromptCacheRepo, StoryRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stories", get(list_stories))
        .route("/stories/{key}", get(get_story))
        .route("/stories/generate", post(generate_story))
        .route("/prompt", get(get_cached_prompt))
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// One row of the saved-stories list: the full story stays behind
/// `GET /stories/{key}`, the list carries a short display preview.
#[derive(Debug, Serialize)]
pub struct StoryListEntry {
    pub key: DbId,
    pub preview: String,
    pub video_url: String,
    pub created_at: Timestamp,
}

impl From<StoryRecord> for StoryListEntry {
    fn from(record: StoryRecord) -> Self {
        Self {
            key: record.key,
            preview: story_preview(&record.story),
            video_url: record.video_url,
            created_at: record.created_at,
        }
    }
}

/// Body for `POST /stories/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateStoryRequest {
    pub prompt: String,
}

/// Response for `POST /stories/generate`.
#[derive(Debug, Serialize)]
pub struct GenerateStoryResponse {
    pub story: String,
}

/// Response for `GET /prompt`.
#[derive(Debug, Serialize)]
pub struct CachedPromptResponse {
    pub prompt: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/stories
///
/// Every saved story, newest first.
pub async fn list_stories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = StoryRepo::list_all(&state.pool).await?;
    let entries: Vec<StoryListEntry> = records.into_iter().map(Into::into).collect();
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/stories/{key}
///
/// Full record for one saved story.
pub async fn get_story(
    State(state): State<AppState>,
    Path(key): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = StoryRepo::find_by_key(&state.pool, key)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Story",
            id: key,
        }))?;
    Ok(Json(DataResponse { data: record }))
}

/// POST /api/v1/stories/generate
///
/// Generate a story from a free-text prompt. Empty prompts are allowed;
/// the output is then vendor-defined. On success the prompt is cached
/// for prefill; a cache write failure is logged and otherwise ignored.
pub async fn generate_story(
    State(state): State<AppState>,
    Json(input): Json<GenerateStoryRequest>,
) -> AppResult<impl IntoResponse> {
    let story = state.storygen.generate(&input.prompt).await?;

    if let Err(e) = PromptCacheRepo::set(&state.pool, &input.prompt).await {
        tracing::warn!(error = %e, "Failed to cache prompt");
    }

    Ok(Json(DataResponse {
        data: GenerateStoryResponse { story },
    }))
}

/// GET /api/v1/prompt
///
/// The last prompt that produced a story, for form prefill.
pub async fn get_cached_prompt(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let prompt = PromptCacheRepo::get(&state.pool).await?;
    Ok(Json(DataResponse {
        data: CachedPromptResponse { prompt },
    }))
}

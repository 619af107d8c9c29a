//! Narration: render a story into an avatar video and save the pair.
//!
//! ```text
//! POST /stories/narrate    narrate_story
//! ```

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use fable_core::error::CoreError;
use fable_core::types::DbId;
use fable_db::repositories::StoryRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/stories/narrate", post(narrate_story))
}

/// Body for `POST /stories/narrate`.
#[derive(Debug, Deserialize)]
pub struct NarrateRequest {
    pub story: String,
}

/// Response for `POST /stories/narrate`.
#[derive(Debug, Serialize)]
pub struct NarrateResponse {
    /// Key of the saved record; `null` when the save itself failed.
    pub key: Option<DbId>,
    pub video_url: String,
    /// Whether the story was shortened to the vendor's input budget.
    pub truncated: bool,
    /// Whether the pair was persisted.
    pub saved: bool,
}

/// POST /api/v1/stories/narrate
///
/// Submits the story to the video vendor, polls the job to a terminal
/// state, and persists the (story, video URL) pair. Records are only
/// ever written complete: a story with no video is never saved, and a
/// persistence failure does not discard the rendered video -- the URL
/// is still returned, flagged `saved: false`.
pub async fn narrate_story(
    State(state): State<AppState>,
    Json(input): Json<NarrateRequest>,
) -> AppResult<impl IntoResponse> {
    if input.story.trim().is_empty() {
        return Err(CoreError::Validation("story text must not be empty".to_string()).into());
    }

    let narration = state
        .orchestrator
        .narrate(&input.story, &state.shutdown)
        .await?;

    // The full story is saved, not the truncated narration input.
    let (key, saved) = match StoryRepo::save(&state.pool, &input.story, &narration.video_url).await
    {
        Ok(record) => (Some(record.key), true),
        Err(e) => {
            tracing::error!(error = %e, "Failed to persist narrated story");
            (None, false)
        }
    };

    Ok(Json(DataResponse {
        data: NarrateResponse {
            key,
            video_url: narration.video_url,
            truncated: narration.truncated,
            saved,
        },
    }))
}

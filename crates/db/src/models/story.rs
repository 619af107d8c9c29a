//! Story entity models.

use fable_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A persisted story/video pair.
///
/// Records are only ever written complete: both `story` and `video_url`
/// are populated at save time, and rows are immutable afterwards apart
/// from full overwrite under the same key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoryRecord {
    /// Creation timestamp in Unix milliseconds; primary key and natural
    /// sort order.
    pub key: DbId,
    /// The generated narrative.
    pub story: String,
    /// Fetchable URL of the rendered narration video.
    pub video_url: String,
    /// Same instant as `key`, kept as a typed column.
    pub created_at: Timestamp,
}

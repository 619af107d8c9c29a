//! Repository for the `stories` table.

use chrono::{DateTime, Utc};
use fable_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::story::StoryRecord;

/// Column list for `stories` queries.
const COLUMNS: &str = "key, story, video_url, created_at";

/// Provides query operations for saved story/video pairs.
pub struct StoryRepo;

impl StoryRepo {
    /// Persist a completed story/video pair, returning the stored row.
    ///
    /// The key is minted from the current wall clock in milliseconds.
    /// Keys are fresh in normal flow; if two saves land in the same
    /// millisecond the later write overwrites the earlier one.
    pub async fn save(
        pool: &SqlitePool,
        story: &str,
        video_url: &str,
    ) -> Result<StoryRecord, sqlx::Error> {
        let created_at = Utc::now();
        let key: DbId = created_at.timestamp_millis();
        Self::save_with_key(pool, key, created_at, story, video_url).await
    }

    /// Insert (or overwrite) a record under an explicit key. Split out
    /// from [`StoryRepo::save`] so tests can pin deterministic keys.
    pub async fn save_with_key(
        pool: &SqlitePool,
        key: DbId,
        created_at: DateTime<Utc>,
        story: &str,
        video_url: &str,
    ) -> Result<StoryRecord, sqlx::Error> {
        let query = format!(
            "INSERT OR REPLACE INTO stories (key, story, video_url, created_at) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StoryRecord>(&query)
            .bind(key)
            .bind(story)
            .bind(video_url)
            .bind(created_at)
            .fetch_one(pool)
            .await
    }

    /// Point lookup by key. `None` when the key does not exist.
    pub async fn find_by_key(
        pool: &SqlitePool,
        key: DbId,
    ) -> Result<Option<StoryRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stories WHERE key = ?1");
        sqlx::query_as::<_, StoryRecord>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Every stored record, newest first. Empty vec on an empty store.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<StoryRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stories ORDER BY key DESC");
        sqlx::query_as::<_, StoryRecord>(&query).fetch_all(pool).await
    }
}

//! Repository for the single-row `prompt_cache` table.
//!
//! Mirrors the prompt-prefill behaviour of the story form: the last
//! prompt that produced a story is remembered and offered back on the
//! next load. Not correctness-relevant to the pipeline.

use chrono::Utc;
use sqlx::SqlitePool;

/// Provides access to the cached story prompt.
pub struct PromptCacheRepo;

impl PromptCacheRepo {
    /// Remember `prompt` as the most recent successful prompt.
    pub async fn set(pool: &SqlitePool, prompt: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO prompt_cache (id, prompt, updated_at) VALUES (1, ?1, ?2) \
             ON CONFLICT(id) DO UPDATE SET prompt = excluded.prompt, \
             updated_at = excluded.updated_at",
        )
        .bind(prompt)
        .bind(Utc::now())
        .execute(pool)
        .await?;
        Ok(())
    }

    /// The cached prompt, if one has ever been stored.
    pub async fn get(pool: &SqlitePool) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT prompt FROM prompt_cache WHERE id = 1")
            .fetch_optional(pool)
            .await
    }
}

//! Configuration loaded from environment variables.
//!
//! All environment access happens here, at the edge: vendor clients and
//! the orchestrator receive explicit config structs and never read the
//! environment themselves.

use std::time::Duration;

use fable_narrator::api::AvatarApiConfig;
use fable_narrator::PollConfig;
use fable_storygen::StorygenConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `330`). Must exceed the
    /// poll deadline (`VIDEO_POLL_INTERVAL_SECS` x `VIDEO_POLL_MAX_ATTEMPTS`),
    /// since the narrate endpoint blocks until the job is terminal.
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `330`                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "330".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Text-generation vendor settings.
///
/// | Env Var         | Default                                       |
/// |-----------------|-----------------------------------------------|
/// | `STORY_API_URL` | `https://api.openai.com/v1/chat/completions`  |
/// | `STORY_API_KEY` | (required)                                    |
/// | `STORY_MODEL`   | `chatgpt-4o-latest`                           |
pub fn storygen_config_from_env() -> StorygenConfig {
    StorygenConfig {
        api_url: std::env::var("STORY_API_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".into()),
        api_key: std::env::var("STORY_API_KEY").expect("STORY_API_KEY must be set"),
        model: std::env::var("STORY_MODEL").unwrap_or_else(|_| "chatgpt-4o-latest".into()),
    }
}

/// Video-generation vendor settings.
///
/// | Env Var         | Default                   |
/// |-----------------|---------------------------|
/// | `VIDEO_API_URL` | `https://api.heygen.com`  |
/// | `VIDEO_API_KEY` | (required)                |
pub fn avatar_config_from_env() -> AvatarApiConfig {
    AvatarApiConfig {
        api_url: std::env::var("VIDEO_API_URL").unwrap_or_else(|_| "https://api.heygen.com".into()),
        api_key: std::env::var("VIDEO_API_KEY").expect("VIDEO_API_KEY must be set"),
    }
}

/// Poll-loop bounds for video status queries.
///
/// | Env Var                   | Default |
/// |---------------------------|---------|
/// | `VIDEO_POLL_INTERVAL_SECS`| `5`     |
/// | `VIDEO_POLL_MAX_ATTEMPTS` | `60`    |
pub fn poll_config_from_env() -> PollConfig {
    let interval_secs: u64 = std::env::var("VIDEO_POLL_INTERVAL_SECS")
        .unwrap_or_else(|_| "5".into())
        .parse()
        .expect("VIDEO_POLL_INTERVAL_SECS must be a valid u64");

    let max_attempts: u32 = std::env::var("VIDEO_POLL_MAX_ATTEMPTS")
        .unwrap_or_else(|_| "60".into())
        .parse()
        .expect("VIDEO_POLL_MAX_ATTEMPTS must be a valid u32");

    PollConfig {
        interval: Duration::from_secs(interval_secs),
        max_attempts,
    }
}

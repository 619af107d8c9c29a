use std::sync::Arc;

use fable_narrator::{AvatarApi, Orchestrator};
use fable_storygen::StorygenClient;
use tokio_util::sync::CancellationToken;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: fable_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Text-generation vendor client.
    pub storygen: Arc<StorygenClient>,
    /// Video-narration orchestrator.
    pub orchestrator: Arc<Orchestrator<AvatarApi>>,
    /// Cancelled on shutdown; in-flight poll loops observe it and stop.
    pub shutdown: CancellationToken,
}

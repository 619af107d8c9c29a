//! Seam between the orchestrator and the vendor HTTP client.

use async_trait::async_trait;

use crate::error::NarratorError;
use crate::job::{JobId, JobStatus};
use crate::settings::RenderSettings;

/// The two vendor operations the orchestrator needs.
///
/// [`AvatarApi`](crate::api::AvatarApi) is the production
/// implementation; tests drive the poll loop with scripted fakes.
#[async_trait]
pub trait VideoService: Send + Sync {
    /// Submit narration input for rendering, returning the vendor's job
    /// identifier.
    async fn submit(
        &self,
        input_text: &str,
        settings: &RenderSettings,
    ) -> Result<JobId, NarratorError>;

    /// Query the current status of a submitted job.
    async fn status(&self, job: &JobId) -> Result<JobStatus, NarratorError>;
}

//! Narration job identity and lifecycle state.

use crate::error::NarratorError;

/// Opaque job identifier assigned by the video vendor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One observation of a job's vendor-reported status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// The video is rendered and fetchable.
    Completed {
        video_url: String,
    },
    /// The vendor gave up on the job.
    Failed,
    /// Any non-terminal vendor status (queued, rendering, ...).
    Processing,
}

impl JobStatus {
    /// Map a vendor status string (and the URL accompanying completed
    /// jobs) onto the three outcomes the poll loop distinguishes.
    ///
    /// Unknown status values are treated as still-processing; only the
    /// two terminal strings end the poll loop.
    pub fn from_vendor(
        status: &str,
        video_url: Option<String>,
    ) -> Result<Self, NarratorError> {
        match status {
            "completed" => {
                let video_url =
                    video_url.ok_or(NarratorError::MalformedResponse("data.video_url"))?;
                Ok(JobStatus::Completed { video_url })
            }
            "failed" => Ok(JobStatus::Failed),
            _ => Ok(JobStatus::Processing),
        }
    }
}

/// Lifecycle state of a submitted job as observed by the orchestrator.
///
/// A job only exists once submission has returned an identifier, so the
/// initial state is already `Polling`. `Completed`, `Failed`, and
/// `TimedOut` are terminal and sticky.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    /// Waiting for a terminal vendor status; `attempts` counts status
    /// queries issued so far.
    Polling { attempts: u32 },
    /// Terminal: the video is ready.
    Completed { video_url: String },
    /// Terminal: the vendor reported failure, or a status query errored.
    Failed { reason: String },
    /// Terminal: the attempt cap elapsed without a terminal status.
    TimedOut { attempts: u32 },
}

impl JobState {
    /// Whether no further status queries will ever be issued.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobState::Polling { .. })
    }
}

/// A submitted narration job being driven to completion.
#[derive(Debug, Clone)]
pub struct NarrationJob {
    /// Vendor-assigned identifier.
    pub id: JobId,
    /// Current observed state.
    pub state: JobState,
    /// Whether the submitted text was shortened to the vendor's budget.
    pub truncated: bool,
}

impl NarrationJob {
    /// A freshly submitted job, not yet queried.
    pub fn new(id: JobId, truncated: bool) -> Self {
        Self {
            id,
            state: JobState::Polling { attempts: 0 },
            truncated,
        }
    }
}

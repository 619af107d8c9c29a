//! Video-narration client and orchestrator.
//!
//! Submits story text to the avatar video-generation vendor, then polls
//! the vendor's status endpoint on a fixed interval until the job
//! reaches a terminal state. Terminal states are sticky, the wait is
//! bounded by an attempt cap, and an in-flight poll loop can be
//! abandoned through a [`CancellationToken`].
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

pub mod api;
pub mod error;
pub mod job;
pub mod orchestrator;
pub mod service;
pub mod settings;

pub use api::{AvatarApi, AvatarApiConfig};
pub use error::NarratorError;
pub use job::{JobId, JobState, JobStatus, NarrationJob};
pub use orchestrator::{Narration, Orchestrator, PollConfig};
pub use service::VideoService;
pub use settings::RenderSettings;

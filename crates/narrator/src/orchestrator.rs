//! Submit-then-poll orchestration for narration jobs.
//!
//! The orchestrator owns no job state of its own: each
//! [`NarrationJob`] carries its identifier and lifecycle state, so any
//! number of jobs can be driven concurrently against one orchestrator.

use std::time::Duration;

use fable_core::story::truncate_for_narration;
use tokio_util::sync::CancellationToken;

use crate::error::NarratorError;
use crate::job::{JobId, JobState, JobStatus, NarrationJob};
use crate::service::VideoService;
use crate::settings::RenderSettings;

/// Tunable parameters for the status poll loop.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between consecutive status queries.
    pub interval: Duration,
    /// Status queries issued before the job is declared [`JobState::TimedOut`].
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            max_attempts: 60,
        }
    }
}

/// Result of a completed narration: the rendered video plus what
/// happened to the input on the way in.
#[derive(Debug, Clone)]
pub struct Narration {
    /// Vendor-assigned job identifier.
    pub job_id: JobId,
    /// Fetchable URL of the rendered video.
    pub video_url: String,
    /// Whether the story text was shortened to the vendor's budget.
    pub truncated: bool,
}

/// Drives narration jobs from story text to a terminal state.
pub struct Orchestrator<S> {
    service: S,
    settings: RenderSettings,
    poll: PollConfig,
}

impl<S: VideoService> Orchestrator<S> {
    /// Create an orchestrator with the default poll configuration.
    pub fn new(service: S, settings: RenderSettings) -> Self {
        Self {
            service,
            settings,
            poll: PollConfig::default(),
        }
    }

    /// Override the poll configuration.
    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    /// Submit story text for narration.
    ///
    /// Text over the vendor budget is shortened first; the returned job
    /// records whether that happened. On submission failure there is no
    /// job identifier and the error is returned as-is (quota exhaustion
    /// arrives as [`NarratorError::QuotaExceeded`]).
    pub async fn submit(&self, story_text: &str) -> Result<NarrationJob, NarratorError> {
        let (input_text, truncated) = truncate_for_narration(story_text);
        if truncated {
            tracing::info!(
                original_chars = story_text.chars().count(),
                "Story shortened to the narration input budget"
            );
        }

        let id = self.service.submit(&input_text, &self.settings).await?;
        Ok(NarrationJob::new(id, truncated))
    }

    /// Poll a job until it reaches a terminal state, returning the
    /// video URL on completion.
    ///
    /// Status queries are issued on the fixed [`PollConfig::interval`].
    /// Terminal states are sticky: driving an already-terminal job
    /// returns its outcome without issuing any query. Cancellation is
    /// checked before every scheduled query and while waiting between
    /// queries; a cancelled drive abandons observation (the job is left
    /// as-is at the vendor and stays resumable).
    pub async fn drive(
        &self,
        job: &mut NarrationJob,
        cancel: &CancellationToken,
    ) -> Result<String, NarratorError> {
        let job_id = job.id.clone();
        let mut attempts = match &job.state {
            JobState::Polling { attempts } => *attempts,
            JobState::Completed { video_url } => return Ok(video_url.clone()),
            JobState::Failed { reason } => {
                return Err(NarratorError::GenerationFailed {
                    reason: reason.clone(),
                })
            }
            JobState::TimedOut { attempts } => {
                return Err(NarratorError::TimedOut {
                    attempts: *attempts,
                })
            }
        };

        loop {
            if attempts >= self.poll.max_attempts {
                job.state = JobState::TimedOut { attempts };
                tracing::warn!(job_id = %job_id, attempts, "Giving up on narration job");
                return Err(NarratorError::TimedOut { attempts });
            }
            if cancel.is_cancelled() {
                return Err(NarratorError::Cancelled);
            }

            attempts += 1;
            job.state = JobState::Polling { attempts };

            let status = tokio::select! {
                _ = cancel.cancelled() => return Err(NarratorError::Cancelled),
                result = self.service.status(&job_id) => match result {
                    Ok(status) => status,
                    // Transport and API errors end the job; the poll
                    // loop does not retry them.
                    Err(e) => {
                        job.state = JobState::Failed {
                            reason: e.to_string(),
                        };
                        tracing::warn!(job_id = %job_id, error = %e, "Status query failed");
                        return Err(e);
                    }
                },
            };

            match status {
                JobStatus::Completed { video_url } => {
                    job.state = JobState::Completed {
                        video_url: video_url.clone(),
                    };
                    tracing::info!(job_id = %job_id, attempts, "Narration video ready");
                    return Ok(video_url);
                }
                JobStatus::Failed => {
                    let reason = "narration vendor reported failure".to_string();
                    job.state = JobState::Failed {
                        reason: reason.clone(),
                    };
                    tracing::warn!(job_id = %job_id, attempts, "Narration job failed");
                    return Err(NarratorError::GenerationFailed { reason });
                }
                JobStatus::Processing => {
                    if attempts >= self.poll.max_attempts {
                        job.state = JobState::TimedOut { attempts };
                        tracing::warn!(job_id = %job_id, attempts, "Giving up on narration job");
                        return Err(NarratorError::TimedOut { attempts });
                    }
                    tracing::debug!(job_id = %job_id, attempts, "Narration still processing");
                }
            }

            // Wait before the next query, respecting cancellation.
            tokio::select! {
                _ = cancel.cancelled() => return Err(NarratorError::Cancelled),
                _ = tokio::time::sleep(self.poll.interval) => {}
            }
        }
    }

    /// Submit and drive in one call.
    pub async fn narrate(
        &self,
        story_text: &str,
        cancel: &CancellationToken,
    ) -> Result<Narration, NarratorError> {
        let mut job = self.submit(story_text).await?;
        let video_url = self.drive(&mut job, cancel).await?;
        Ok(Narration {
            job_id: job.id,
            video_url,
            truncated: job.truncated,
        })
    }
}

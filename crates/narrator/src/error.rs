//! Errors from the narration vendor layer and the poll orchestrator.

/// Errors surfaced while submitting or polling a narration job.
#[derive(Debug, thiserror::Error)]
pub enum NarratorError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The vendor returned a non-2xx status code.
    #[error("video API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for diagnostics.
        body: String,
    },

    /// The vendor refused the submission because the daily generation
    /// cap is exhausted. Distinguished from [`NarratorError::Api`] so
    /// callers can show a friendlier message.
    #[error("daily video generation quota exhausted: {message}")]
    QuotaExceeded {
        /// Vendor-supplied detail.
        message: String,
    },

    /// A 2xx response missing an expected field.
    #[error("video API response missing {0}")]
    MalformedResponse(&'static str),

    /// The vendor reported the job itself as failed.
    #[error("video generation failed: {reason}")]
    GenerationFailed {
        /// What the failure looked like from this side.
        reason: String,
    },

    /// The job never reached a terminal vendor status within the
    /// configured attempt cap.
    #[error("no terminal status after {attempts} status checks")]
    TimedOut {
        /// Status queries issued before giving up.
        attempts: u32,
    },

    /// The caller abandoned the poll loop. The job itself is left
    /// running at the vendor; only observation stops.
    #[error("narration abandoned by caller")]
    Cancelled,
}

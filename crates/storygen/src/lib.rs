//! Text-generation vendor client.
//!
//! One-shot request/response wrapper around an OpenAI-compatible
//! chat-completion endpoint, fixed to produce short children's bedtime
//! stories. No retry, no streaming: either a complete story comes back
//! or an error is raised.

mod client;
mod wire;

pub use client::{StorygenClient, StorygenConfig, StorygenError, SYSTEM_INSTRUCTION};

//! Fixed presentation parameters for rendered narration videos.
//!
//! These are configuration constants, not part of the state machine's
//! variable surface: every job renders with the same avatar, voice, and
//! frame.

/// Avatar, voice, and frame settings sent with every submission.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Vendor avatar identity.
    pub avatar_id: String,
    /// Avatar rendering style.
    pub avatar_style: String,
    /// Vendor voice identity used to read the story.
    pub voice_id: String,
    /// Background color behind the avatar.
    pub background_color: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output aspect ratio.
    pub aspect_ratio: String,
    /// Vendor test mode: watermarked output that does not count against
    /// the daily generation cap.
    pub test_mode: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            avatar_id: "175bbfcd0b2e4b7b90d1588a7a815a50".to_string(),
            avatar_style: "normal".to_string(),
            voice_id: "102c45689f6a437f81b3b61d3e7ece82".to_string(),
            // Light lavender.
            background_color: "#E6E6FA".to_string(),
            width: 1280,
            height: 720,
            aspect_ratio: "16:9".to_string(),
            test_mode: false,
        }
    }
}

//! Story-text constants and transformations shared by the narration
//! pipeline and the presentation layer.
//!
//! Character counts here are Unicode scalar values, not bytes -- the
//! narration vendor's input ceiling is a character budget and stories
//! routinely contain non-ASCII punctuation.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Narration input budget
// ---------------------------------------------------------------------------

/// Maximum character count the narration vendor accepts as input text.
pub const NARRATION_CHAR_BUDGET: usize = 2000;
/// Characters of story content kept when a story must be shortened.
pub const TRUNCATED_CONTENT_LEN: usize = 1990;
/// Marker appended to shortened story text.
pub const TRUNCATION_MARKER: &str = "...";

/// Characters of story text shown in saved-story list previews.
pub const PREVIEW_CHAR_LEN: usize = 50;

/// Leading `Title:` markers and `*` decoration emitted by the text
/// generation model, removed before display.
static TITLE_DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)title:?\s*|\*").expect("title decoration regex is valid"));

// ---------------------------------------------------------------------------
// Truncation
// ---------------------------------------------------------------------------

/// Shorten story text to the narration vendor's input budget.
///
/// Text of at most [`NARRATION_CHAR_BUDGET`] characters passes through
/// unchanged. Longer text is cut to its first [`TRUNCATED_CONTENT_LEN`]
/// characters with [`TRUNCATION_MARKER`] appended. The returned flag is
/// `true` when truncation occurred, so callers can surface a notice.
pub fn truncate_for_narration(text: &str) -> (Cow<'_, str>, bool) {
    // Byte offset one past the keep window; `None` means the text has
    // at most TRUNCATED_CONTENT_LEN characters and always fits.
    let Some((cut, _)) = text.char_indices().nth(TRUNCATED_CONTENT_LEN) else {
        return (Cow::Borrowed(text), false);
    };

    // Count just enough of the tail to decide whether the budget is
    // exceeded; the tail itself is unbounded.
    let headroom = NARRATION_CHAR_BUDGET - TRUNCATED_CONTENT_LEN;
    let tail_chars = text[cut..].chars().take(headroom + 1).count();
    if TRUNCATED_CONTENT_LEN + tail_chars <= NARRATION_CHAR_BUDGET {
        return (Cow::Borrowed(text), false);
    }

    let mut shortened = String::with_capacity(cut + TRUNCATION_MARKER.len());
    shortened.push_str(&text[..cut]);
    shortened.push_str(TRUNCATION_MARKER);
    (Cow::Owned(shortened), true)
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Remove `Title:` markers and `*` decoration from generated text.
pub fn strip_title_decoration(text: &str) -> String {
    TITLE_DECORATION.replace_all(text, "").trim().to_string()
}

/// Short list-view preview of a story: decoration stripped, cut to
/// [`PREVIEW_CHAR_LEN`] characters with an ellipsis when longer.
pub fn story_preview(text: &str) -> String {
    let cleaned = strip_title_decoration(text);
    match cleaned.char_indices().nth(PREVIEW_CHAR_LEN) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &cleaned[..cut]),
        None => cleaned,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn story_of_len(n: usize) -> String {
        "a".repeat(n)
    }

    // -- Truncation --

    #[test]
    fn truncate_short_text_unchanged() {
        let text = story_of_len(120);
        let (out, truncated) = truncate_for_narration(&text);
        assert_eq!(out, text);
        assert!(!truncated);
    }

    #[test]
    fn truncate_at_exact_budget_unchanged() {
        let text = story_of_len(NARRATION_CHAR_BUDGET);
        let (out, truncated) = truncate_for_narration(&text);
        assert_eq!(out.chars().count(), NARRATION_CHAR_BUDGET);
        assert!(!truncated);
    }

    #[test]
    fn truncate_one_past_budget_shortens() {
        let text = story_of_len(NARRATION_CHAR_BUDGET + 1);
        let (out, truncated) = truncate_for_narration(&text);
        assert!(truncated);
        assert_eq!(
            out.chars().count(),
            TRUNCATED_CONTENT_LEN + TRUNCATION_MARKER.len()
        );
        assert!(out.ends_with(TRUNCATION_MARKER));
        assert_eq!(&out[..TRUNCATED_CONTENT_LEN], &text[..TRUNCATED_CONTENT_LEN]);
    }

    #[test]
    fn truncate_keeps_first_1990_chars_of_long_text() {
        let text = story_of_len(10_000);
        let (out, truncated) = truncate_for_narration(&text);
        assert!(truncated);
        assert_eq!(out.len(), TRUNCATED_CONTENT_LEN + TRUNCATION_MARKER.len());
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        // 2000 two-byte characters: within budget despite 4000 bytes.
        let text = "é".repeat(NARRATION_CHAR_BUDGET);
        let (out, truncated) = truncate_for_narration(&text);
        assert!(!truncated);
        assert_eq!(out, text);

        // One more character pushes it over; the cut must land on a
        // character boundary.
        let text = "é".repeat(NARRATION_CHAR_BUDGET + 1);
        let (out, truncated) = truncate_for_narration(&text);
        assert!(truncated);
        assert_eq!(
            out.chars().count(),
            TRUNCATED_CONTENT_LEN + TRUNCATION_MARKER.len()
        );
    }

    #[test]
    fn truncate_borrows_when_unchanged() {
        let text = story_of_len(10);
        let (out, _) = truncate_for_narration(&text);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    // -- Title decoration --

    #[test]
    fn strip_removes_title_prefix() {
        assert_eq!(
            strip_title_decoration("Title: The Brave Dragon"),
            "The Brave Dragon"
        );
    }

    #[test]
    fn strip_is_case_insensitive_and_removes_asterisks() {
        assert_eq!(
            strip_title_decoration("**title The Brave Dragon**"),
            "The Brave Dragon"
        );
    }

    #[test]
    fn strip_leaves_plain_text_alone() {
        assert_eq!(
            strip_title_decoration("Once upon a time..."),
            "Once upon a time..."
        );
    }

    // -- Previews --

    #[test]
    fn preview_short_story_is_whole_story() {
        assert_eq!(story_preview("A tiny tale."), "A tiny tale.");
    }

    #[test]
    fn preview_cuts_at_fifty_chars_with_ellipsis() {
        let text = story_of_len(80);
        let preview = story_preview(&text);
        assert_eq!(
            preview.chars().count(),
            PREVIEW_CHAR_LEN + TRUNCATION_MARKER.len()
        );
        assert!(preview.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn preview_strips_decoration_before_cutting() {
        let text = format!("Title: {}", story_of_len(60));
        assert!(!story_preview(&text).contains("Title"));
    }
}

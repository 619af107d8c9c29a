pub mod health;
pub mod narration;
pub mod stories;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /stories                 list saved stories (GET)
/// /stories/{key}           fetch one saved story (GET)
/// /stories/generate        generate a story from a prompt (POST)
/// /stories/narrate         render and save a narration video (POST)
/// /prompt                  last cached story prompt (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(stories::router())
        .merge(narration::router())
}

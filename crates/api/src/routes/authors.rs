use axum::routing::post;
use axum::Router;

use crate::handlers::authors;
use crate::state::AppState;

/// Author routes.
///
/// ```text
/// POST   /authors   -> create_author
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/authors", post(authors::create_author))
}

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::quotes;
use crate::state::AppState;

/// Quote routes.
///
/// ```text
/// GET    /quotes                                  -> list_quotes
/// PUT    /quotes/{id}                             -> edit_quote
/// DELETE /quotes/{id}                             -> delete_quote
/// GET    /authors/{author_id}/quotes/{quote_id}   -> get_quote
/// POST   /authors/{author_id}/quotes              -> create_quote
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quotes", get(quotes::list_quotes))
        .route(
            "/quotes/{id}",
            put(quotes::edit_quote).delete(quotes::delete_quote),
        )
        .route(
            "/authors/{author_id}/quotes/{quote_id}",
            get(quotes::get_quote),
        )
        .route("/authors/{author_id}/quotes", post(quotes::create_quote))
}

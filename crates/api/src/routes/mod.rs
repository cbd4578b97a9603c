pub mod authors;
pub mod health;
pub mod quotes;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /quotes                                  list (GET)
/// /quotes/{id}                             edit (PUT), delete (DELETE)
///
/// /authors                                 create (POST)
/// /authors/{author_id}/quotes              create quote (POST)
/// /authors/{author_id}/quotes/{quote_id}   get quote (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(quotes::router())
        .merge(authors::router())
}

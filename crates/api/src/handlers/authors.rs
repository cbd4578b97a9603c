//! Handlers for the author resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quotes_core::quotes::validate_author_name;
use quotes_db::models::author::CreateAuthor;
use quotes_db::repositories::AuthorRepo;
use serde_json::json;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;
use crate::views::AuthorView;

/// Error text returned when an author name is already taken.
pub const DUPLICATE_NAME_MESSAGE: &str = "Name must Unique";

/// POST /authors
///
/// Create an author. A name that is already taken rolls the insert back and
/// answers 400 `{"error": "Name must Unique"}`; any other store failure
/// propagates.
pub async fn create_author(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateAuthor>,
) -> AppResult<Response> {
    validate_author_name(&input.name)?;

    match AuthorRepo::create(&state.pool, &input).await {
        Ok(author) => {
            tracing::info!(author_id = author.id, name = %author.name, "Author created");
            Ok((StatusCode::CREATED, Json(AuthorView::from(&author))).into_response())
        }
        Err(err) if quotes_db::is_unique_violation(&err) => {
            tracing::warn!(name = %input.name, "Author name already taken");
            Ok((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": DUPLICATE_NAME_MESSAGE })),
            )
                .into_response())
        }
        Err(err) => Err(err.into()),
    }
}

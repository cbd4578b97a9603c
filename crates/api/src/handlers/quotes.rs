//! Handlers for the quote resource.
//!
//! Quotes are always rendered with their author nested, see
//! [`QuoteView`](crate::views::QuoteView).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use quotes_core::error::CoreError;
use quotes_core::quotes::{non_empty, non_zero, validate_quote_text};
use quotes_core::types::DbId;
use quotes_db::models::quote::{CreateQuote, EditQuote};
use quotes_db::repositories::QuoteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::state::AppState;
use crate::views::QuoteView;

fn quote_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Quote", id })
}

/// GET /quotes
///
/// List every quote. An empty store yields an empty array.
pub async fn list_quotes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let quotes = QuoteRepo::list_with_authors(&state.pool).await?;
    let views: Vec<QuoteView> = quotes.iter().map(QuoteView::from).collect();

    Ok(Json(views))
}

/// GET /authors/{author_id}/quotes/{quote_id}
///
/// Lookup is by quote id alone; the author id in the path is not checked
/// against the quote's owner.
pub async fn get_quote(
    State(state): State<AppState>,
    PathParam((_author_id, quote_id)): PathParam<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let quote = QuoteRepo::find_with_author(&state.pool, quote_id)
        .await?
        .ok_or_else(|| quote_not_found(quote_id))?;

    Ok(Json(QuoteView::from(&quote)))
}

/// POST /authors/{author_id}/quotes
///
/// Create a quote with the default rate. An unknown author is not checked up
/// front; the foreign key rejects the insert and the request fails with 500.
pub async fn create_quote(
    State(state): State<AppState>,
    PathParam(author_id): PathParam<DbId>,
    JsonBody(input): JsonBody<CreateQuote>,
) -> AppResult<impl IntoResponse> {
    validate_quote_text(&input.text)?;

    let quote = QuoteRepo::create(&state.pool, author_id, &input).await?;

    tracing::info!(quote_id = quote.id, author_id, "Quote created");

    Ok((StatusCode::CREATED, Json(QuoteView::from(&quote))))
}

/// PUT /quotes/{id}
///
/// Overwrite the provided fields of an existing quote (200). Empty text and
/// a zero author id count as absent.
///
/// When no quote has this id, a new quote is created from the body instead
/// (201); that path needs both `author` and `text`. The new quote gets its
/// own id, not the one in the path.
pub async fn edit_quote(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<EditQuote>,
) -> AppResult<impl IntoResponse> {
    let author_id = non_zero(input.author);
    let text = non_empty(input.text.as_deref());

    if let Some(text) = text {
        validate_quote_text(text)?;
    }

    if let Some(quote) = QuoteRepo::update(&state.pool, id, author_id, text).await? {
        tracing::info!(quote_id = id, author_id = quote.author_id, "Quote updated");
        return Ok((StatusCode::OK, Json(QuoteView::from(&quote))));
    }

    let (Some(author_id), Some(text)) = (author_id, text) else {
        return Err(AppError::BadRequest(format!(
            "Quote with id={id} not found; creating a new quote requires both author and text"
        )));
    };

    let input = CreateQuote {
        text: text.to_string(),
    };
    let quote = QuoteRepo::create(&state.pool, author_id, &input).await?;

    tracing::info!(
        requested_id = id,
        quote_id = quote.id,
        author_id,
        "Quote created from edit of missing id",
    );

    Ok((StatusCode::CREATED, Json(QuoteView::from(&quote))))
}

/// DELETE /quotes/{id}
///
/// Delete a quote and return its last state.
pub async fn delete_quote(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let quote = QuoteRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| quote_not_found(id))?;

    tracing::info!(quote_id = id, "Quote deleted");

    Ok(Json(QuoteView::from(&quote)))
}

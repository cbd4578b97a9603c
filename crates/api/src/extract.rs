//! Request extractors with JSON error bodies.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] on request bodies.
///
/// A body that is not JSON, is missing a required field, or has a field of
/// the wrong type is answered with a 400 `{"error", "code"}` body instead of
/// axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Drop-in replacement for [`axum::extract::Path`].
///
/// An id segment that is not an integer (or overflows `i64`) names no
/// resource, so it is answered with a 404 `{"error", "code"}` body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

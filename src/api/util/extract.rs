//! Extractors whose rejections surface as `AppError::InvalidInput` (400 + JSON body)
//! instead of axum's default plain-text 400/415/422 responses.

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::AppError;

/// JSON body; unparseable bodies, wrong field types and a missing
/// `Content-Type` are all invalid input.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Query string; non-numeric ids are invalid input.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);

/// Path segments; a non-numeric `{deck_id}` is invalid input.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

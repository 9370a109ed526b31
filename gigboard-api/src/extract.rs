/// Request extractors
///
/// `AppJson` and `AppPath` wrap the axum extractors so that rejections
/// (invalid JSON, a missing required field, a non-numeric id) come back as
/// the same JSON error body as every other `ApiError`, with status 400.

use crate::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON request body with `ApiError` rejections
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// Path parameters with `ApiError` rejections
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);

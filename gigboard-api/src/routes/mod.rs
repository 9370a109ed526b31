/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: User CRUD
/// - `orders`: Order CRUD, with customer/executor names on listing
/// - `offers`: Offer CRUD, with order/executor names on listing and lookup

pub mod health;
pub mod offers;
pub mod orders;
pub mod users;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// `201 Created` with an empty body and a `Location` header
pub(crate) fn created(location: String) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)]).into_response()
}

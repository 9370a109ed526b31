/// User endpoints
///
/// # Endpoints
///
/// - `GET /users` - List users
/// - `POST /users` - Create user
/// - `GET /users/:id` - Get user
/// - `PUT /users/:id` - Replace user
/// - `DELETE /users/:id` - Delete user

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{AppJson, AppPath},
    routes::created,
};
use axum::{extract::State, http::StatusCode, response::Response, Json};
use gigboard_shared::models::user::{CreateUser, UpdateUser, User};
use tracing::info;

/// List users
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": 1,
///     "first_name": "Hudson",
///     "last_name": "Pauloh",
///     "age": 31,
///     "email": "elliot16@mymail.com",
///     "role": "customer",
///     "phone": "6197021684"
///   }
/// ]
/// ```
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

/// Create user
///
/// All six fields are required. Responds `201 Created` with an empty body
/// and `Location: /users/{id}`.
///
/// # Errors
///
/// - `400 Bad Request`: Malformed body or missing field
/// - `409 Conflict`: Email already exists
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateUser>,
) -> ApiResult<Response> {
    let user = User::create(&state.db, req).await?;

    info!(user_id = user.id, "User created");

    Ok(created(format!("/users/{}", user.id)))
}

/// Get user
///
/// # Errors
///
/// - `404 Not Found`: No user with this id
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User", id))?;

    Ok(Json(user))
}

/// Replace user
///
/// Every field is required and every field is overwritten. Responds
/// `200 OK` with an empty body.
///
/// # Errors
///
/// - `400 Bad Request`: Malformed body or missing field
/// - `404 Not Found`: No user with this id
/// - `409 Conflict`: Email belongs to another user
pub async fn replace_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<UpdateUser>,
) -> ApiResult<StatusCode> {
    User::update(&state.db, id, req)
        .await?
        .ok_or_else(|| ApiError::not_found("User", id))?;

    info!(user_id = id, "User replaced");

    Ok(StatusCode::OK)
}

/// Delete user
///
/// # Errors
///
/// - `404 Not Found`: No user with this id, including one already deleted
pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<StatusCode> {
    if !User::delete(&state.db, id).await? {
        return Err(ApiError::not_found("User", id));
    }

    info!(user_id = id, "User deleted");

    Ok(StatusCode::OK)
}

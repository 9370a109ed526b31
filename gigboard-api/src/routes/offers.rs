/// Offer endpoints
///
/// # Endpoints
///
/// - `GET /offers` - List offers
/// - `POST /offers` - Create offer
/// - `GET /offers/:id` - Get offer
/// - `PUT /offers/:id` - Replace offer
/// - `DELETE /offers/:id` - Delete offer
///
/// Both listing and lookup show the order by name and the executor by first
/// name, keeping the raw id when the referenced row is missing.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{AppJson, AppPath},
    routes::created,
};
use axum::{extract::State, http::StatusCode, response::Response, Json};
use gigboard_shared::models::{
    offer::{CreateOffer, Offer, UpdateOffer},
    order::Order,
    reference::{resolve, Reference},
    user::User,
};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::info;

/// Offer with its references resolved
#[derive(Debug, Serialize)]
pub struct OfferResponse {
    pub id: i64,

    /// Order name, or the raw id if the order is missing
    pub order_id: Reference,

    /// Executor's first name, or the raw id if the user is missing
    pub executor_id: Reference,
}

impl OfferResponse {
    async fn resolve(pool: &SqlitePool, offer: Offer) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: offer.id,
            order_id: resolve::<Order>(pool, offer.order_id).await?,
            executor_id: resolve::<User>(pool, offer.executor_id).await?,
        })
    }
}

/// List offers
///
/// # Response
///
/// ```json
/// [
///   { "id": 1, "order_id": "Walk the dog", "executor_id": "Lawson" },
///   { "id": 2, "order_id": 44, "executor_id": "Tomas" }
/// ]
/// ```
pub async fn list_offers(State(state): State<AppState>) -> ApiResult<Json<Vec<OfferResponse>>> {
    let offers = Offer::list(&state.db).await?;

    let mut items = Vec::with_capacity(offers.len());
    for offer in offers {
        items.push(OfferResponse::resolve(&state.db, offer).await?);
    }

    Ok(Json(items))
}

/// Create offer
///
/// Responds `201 Created` with an empty body and `Location: /offers/{id}`.
/// The referenced order and user are not required to exist.
pub async fn create_offer(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateOffer>,
) -> ApiResult<Response> {
    let offer = Offer::create(&state.db, req).await?;

    info!(offer_id = offer.id, order_id = offer.order_id, "Offer created");

    Ok(created(format!("/offers/{}", offer.id)))
}

/// Get offer
///
/// # Errors
///
/// - `404 Not Found`: No offer with this id
pub async fn get_offer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<Json<OfferResponse>> {
    let offer = Offer::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Offer", id))?;

    Ok(Json(OfferResponse::resolve(&state.db, offer).await?))
}

/// Replace offer
///
/// # Errors
///
/// - `400 Bad Request`: Malformed body or missing field
/// - `404 Not Found`: No offer with this id
pub async fn replace_offer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<UpdateOffer>,
) -> ApiResult<StatusCode> {
    Offer::update(&state.db, id, req)
        .await?
        .ok_or_else(|| ApiError::not_found("Offer", id))?;

    info!(offer_id = id, "Offer replaced");

    Ok(StatusCode::OK)
}

/// Delete offer
///
/// # Errors
///
/// - `404 Not Found`: No offer with this id
pub async fn delete_offer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<StatusCode> {
    if !Offer::delete(&state.db, id).await? {
        return Err(ApiError::not_found("Offer", id));
    }

    info!(offer_id = id, "Offer deleted");

    Ok(StatusCode::OK)
}

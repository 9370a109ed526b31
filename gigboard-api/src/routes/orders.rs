/// Order endpoints
///
/// # Endpoints
///
/// - `GET /orders` - List orders, customer and executor shown by first name
/// - `POST /orders` - Create order
/// - `GET /orders/:id` - Get order with raw user ids
/// - `PUT /orders/:id` - Replace order (customer cannot change)
/// - `DELETE /orders/:id` - Delete order
///
/// Dates are accepted as `MM/DD/YYYY` and returned as `YYYY-MM-DD`.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{AppJson, AppPath},
    routes::created,
};
use axum::{extract::State, http::StatusCode, response::Response, Json};
use chrono::NaiveDate;
use gigboard_shared::models::{
    date::{parse_date, DateError},
    order::{CreateOrder, Order, UpdateOrder},
    reference::{resolve, Reference},
    user::User,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Create order request
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub name: String,
    pub description: String,

    /// `MM/DD/YYYY`
    pub start_date: String,

    /// `MM/DD/YYYY`
    pub end_date: String,

    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}

impl TryFrom<CreateOrderRequest> for CreateOrder {
    type Error = DateError;

    fn try_from(req: CreateOrderRequest) -> Result<Self, Self::Error> {
        Ok(CreateOrder {
            start_date: parse_date(&req.start_date)?,
            end_date: parse_date(&req.end_date)?,
            name: req.name,
            description: req.description,
            address: req.address,
            price: req.price,
            customer_id: req.customer_id,
            executor_id: req.executor_id,
        })
    }
}

/// Replace order request
///
/// There is no `customer_id`; one sent by the client is ignored.
#[derive(Debug, Deserialize)]
pub struct ReplaceOrderRequest {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i64,
    pub executor_id: i64,
}

impl TryFrom<ReplaceOrderRequest> for UpdateOrder {
    type Error = DateError;

    fn try_from(req: ReplaceOrderRequest) -> Result<Self, Self::Error> {
        Ok(UpdateOrder {
            start_date: parse_date(&req.start_date)?,
            end_date: parse_date(&req.end_date)?,
            name: req.name,
            description: req.description,
            address: req.address,
            price: req.price,
            executor_id: req.executor_id,
        })
    }
}

/// Order list item with user references resolved
#[derive(Debug, Serialize)]
pub struct OrderListItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub address: String,
    pub price: i64,

    /// Customer's first name, or the raw id if the user is missing
    pub customer_id: Reference,

    /// Executor's first name, or the raw id if the user is missing
    pub executor_id: Reference,
}

/// List orders
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": 1,
///     "name": "Walk the dog",
///     "description": "Two walks a day for a week",
///     "start_date": "2013-02-08",
///     "end_date": "2013-02-15",
///     "address": "4759 William Haven Apt. 194",
///     "price": 5512,
///     "customer_id": "Hudson",
///     "executor_id": 17
///   }
/// ]
/// ```
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<OrderListItem>>> {
    let orders = Order::list(&state.db).await?;

    let mut items = Vec::with_capacity(orders.len());
    for order in orders {
        let customer_id = resolve::<User>(&state.db, order.customer_id).await?;
        let executor_id = resolve::<User>(&state.db, order.executor_id).await?;

        items.push(OrderListItem {
            id: order.id,
            name: order.name,
            description: order.description,
            start_date: order.start_date,
            end_date: order.end_date,
            address: order.address,
            price: order.price,
            customer_id,
            executor_id,
        });
    }

    Ok(Json(items))
}

/// Create order
///
/// Responds `201 Created` with an empty body and `Location: /orders/{id}`.
///
/// # Errors
///
/// - `400 Bad Request`: Malformed body, missing field or date not `MM/DD/YYYY`
/// - `409 Conflict`: Address already exists
pub async fn create_order(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateOrderRequest>,
) -> ApiResult<Response> {
    let data = CreateOrder::try_from(req)?;
    let order = Order::create(&state.db, data).await?;

    info!(order_id = order.id, "Order created");

    Ok(created(format!("/orders/{}", order.id)))
}

/// Get order
///
/// Returns the stored row as is: `customer_id` and `executor_id` stay ids.
///
/// # Errors
///
/// - `404 Not Found`: No order with this id
pub async fn get_order(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<Json<Order>> {
    let order = Order::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Order", id))?;

    Ok(Json(order))
}

/// Replace order
///
/// Overwrites every field except `customer_id`. Responds `200 OK` with an
/// empty body.
///
/// # Errors
///
/// - `400 Bad Request`: Malformed body, missing field or bad date
/// - `404 Not Found`: No order with this id
/// - `409 Conflict`: Address belongs to another order
pub async fn replace_order(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<ReplaceOrderRequest>,
) -> ApiResult<StatusCode> {
    let data = UpdateOrder::try_from(req)?;

    Order::update(&state.db, id, data)
        .await?
        .ok_or_else(|| ApiError::not_found("Order", id))?;

    info!(order_id = id, "Order replaced");

    Ok(StatusCode::OK)
}

/// Delete order
///
/// Offers pointing at the order are kept.
///
/// # Errors
///
/// - `404 Not Found`: No order with this id
pub async fn delete_order(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<StatusCode> {
    if !Order::delete(&state.db, id).await? {
        return Err(ApiError::not_found("Order", id));
    }

    info!(order_id = id, "Order deleted");

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start_date: &str, end_date: &str) -> CreateOrderRequest {
        CreateOrderRequest {
            name: "Paint".to_string(),
            description: "Fence".to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            address: "1 Elm St".to_string(),
            price: 100,
            customer_id: 1,
            executor_id: 2,
        }
    }

    #[test]
    fn test_create_request_parses_dates() {
        let order = CreateOrder::try_from(request("01/31/2024", "02/02/2024")).unwrap();
        assert_eq!(order.start_date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(order.end_date, NaiveDate::from_ymd_opt(2024, 2, 2).unwrap());
    }

    #[test]
    fn test_create_request_rejects_bad_date() {
        assert!(CreateOrder::try_from(request("13/40/2024", "02/02/2024")).is_err());
        assert!(CreateOrder::try_from(request("01/31/2024", "2024-02-02")).is_err());
    }

    #[test]
    fn test_replace_request_ignores_customer_id() {
        let req: ReplaceOrderRequest = serde_json::from_value(serde_json::json!({
            "name": "Paint",
            "description": "Fence",
            "start_date": "01/31/2024",
            "end_date": "02/02/2024",
            "address": "1 Elm St",
            "price": 100,
            "customer_id": 9,
            "executor_id": 2
        }))
        .unwrap();

        let update = UpdateOrder::try_from(req).unwrap();
        assert_eq!(update.executor_id, 2);
    }
}

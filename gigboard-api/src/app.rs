/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use gigboard_api::{app::AppState, config::Config};
/// use gigboard_shared::db::pool::create_pool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(config.pool_config()).await?;
/// let state = AppState::new(pool, config);
/// let app = gigboard_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use std::{sync::Arc, time::Duration};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Built once at startup and cloned into every handler via Axum's `State`
/// extractor. The pool is reference counted, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET    /health
/// ├── /users
/// │   ├── GET    /          # List users
/// │   ├── POST   /          # Create user
/// │   ├── GET    /:id       # Get user
/// │   ├── PUT    /:id       # Replace user
/// │   └── DELETE /:id       # Delete user
/// ├── /orders               # Same five operations
/// └── /offers               # Same five operations
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Request timeout (tower-http TimeoutLayer)
/// 2. Logging (tower-http TraceLayer)
/// 3. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let user_routes = Router::new()
        .route(
            "/users",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route(
            "/users/:id",
            get(routes::users::get_user)
                .put(routes::users::replace_user)
                .delete(routes::users::delete_user),
        );

    let order_routes = Router::new()
        .route(
            "/orders",
            get(routes::orders::list_orders).post(routes::orders::create_order),
        )
        .route(
            "/orders/:id",
            get(routes::orders::get_order)
                .put(routes::orders::replace_order)
                .delete(routes::orders::delete_order),
        );

    let offer_routes = Router::new()
        .route(
            "/offers",
            get(routes::offers::list_offers).post(routes::offers::create_offer),
        )
        .route(
            "/offers/:id",
            get(routes::offers::get_offer)
                .put(routes::offers::replace_offer)
                .delete(routes::offers::delete_offer),
        );

    let cors = if state.config.api.cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
            .expose_headers([header::LOCATION])
            .max_age(Duration::from_secs(3600))
    };

    let request_timeout = Duration::from_secs(state.config.api.request_timeout_secs);

    Router::new()
        .merge(health_routes)
        .merge(user_routes)
        .merge(order_routes)
        .merge(offer_routes)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

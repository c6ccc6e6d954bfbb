//! API Routes
//!
//! Configures the Axum router for the price catalog.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_handler, delete_handler, health_handler, list_handler, price_handler, stats_handler,
    update_handler, AppState,
};

/// Creates the router with every catalog endpoint.
///
/// # Endpoints
/// - `GET /list` - All resident items
/// - `GET /price?item=` - One item's price
/// - `POST /create?item=&price=` - Add or overwrite an item
/// - `PUT /update?item=&price=` - Change an existing item's price
/// - `DELETE /delete?item=` - Remove an item
/// - `GET /stats` - Cache counters
/// - `GET /health` - Health check
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/list", get(list_handler))
        .route("/price", get(price_handler))
        .route("/create", post(create_handler))
        .route("/update", put(update_handler))
        .route("/delete", delete(delete_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

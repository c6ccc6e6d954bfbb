//! API Module
//!
//! HTTP handlers and routing for the price catalog served from the LRU cache.
//!
//! # Endpoints
//! - `GET /list` - List resident items
//! - `GET /price?item=` - Look up an item's price
//! - `POST /create?item=&price=` - Add or overwrite an item
//! - `PUT /update?item=&price=` - Change an existing item's price
//! - `DELETE /delete?item=` - Remove an item
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

//! API Handlers
//!
//! HTTP request handlers for the price catalog. Each handler holds the cache
//! lock only for the single cache call it makes.

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, info};

use crate::cache::SharedCache;
use crate::config::Config;
use crate::error::{ApiError, CacheError, Result as CacheResult};
use crate::models::{
    Dollars, HealthResponse, ItemQuery, ItemResponse, ListResponse, MessageResponse, PriceQuery,
    StatsResponse,
};

/// Items loaded when the catalog is seeded.
pub const SEED_ITEMS: [(&str, f32); 2] = [("shoes", 50.0), ("socks", 5.0)];

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Item name to price, bounded by LRU eviction
    pub catalog: SharedCache<String, Dollars>,
}

impl AppState {
    /// Wraps an existing catalog cache.
    pub fn new(catalog: SharedCache<String, Dollars>) -> Self {
        Self { catalog }
    }

    /// Creates an empty catalog of the configured capacity.
    pub fn with_capacity(capacity: usize) -> CacheResult<Self> {
        SharedCache::new(capacity).map(Self::new)
    }

    /// Creates the catalog from configuration, seeding it if requested.
    pub fn from_config(config: &Config) -> CacheResult<Self> {
        let state = Self::with_capacity(config.capacity)?;
        if config.seed_catalog {
            state.seed();
        }
        Ok(state)
    }

    /// Loads the starter items.
    pub fn seed(&self) {
        for (item, price) in SEED_ITEMS {
            self.catalog.put(item.to_string(), Dollars(price));
        }
        info!("Seeded catalog with {} items", SEED_ITEMS.len());
    }
}

fn item_error(item: &str, err: CacheError) -> ApiError {
    match err {
        CacheError::NotFound => {
            debug!(item, "catalog miss");
            ApiError::NotFound(format!("no such item: {:?}", item))
        }
        other => other.into(),
    }
}

/// Handler for GET /list
///
/// Lists every resident item without affecting recency.
pub async fn list_handler(State(state): State<AppState>) -> Json<ListResponse> {
    let items = state
        .catalog
        .snapshot()
        .into_iter()
        .map(|(item, price)| ItemResponse::new(item, price))
        .collect();

    Json(ListResponse::new(items))
}

/// Handler for GET /price?item=
///
/// Looks up one item; counts as a use for eviction purposes.
pub async fn price_handler(
    State(state): State<AppState>,
    Query(query): Query<ItemQuery>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = query.item().map_err(ApiError::InvalidRequest)?;
    let price = state
        .catalog
        .get(item)
        .map_err(|err| item_error(item, err))?;

    Ok(Json(ItemResponse::new(item, price)))
}

/// Handler for POST /create?item=&price=
///
/// Inserts or overwrites an item, possibly evicting the least recently used one.
pub async fn create_handler(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (item, price) = query.parse().map_err(ApiError::InvalidRequest)?;
    state.catalog.put(item.to_string(), price);
    info!(item, %price, "item created");

    Ok(Json(MessageResponse::created(item, price)))
}

/// Handler for PUT /update?item=&price=
///
/// Changes the price of an existing item only.
pub async fn update_handler(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (item, price) = query.parse().map_err(ApiError::InvalidRequest)?;
    let previous = state
        .catalog
        .replace(item, price)
        .map_err(|err| item_error(item, err))?;
    info!(item, %previous, %price, "item updated");

    Ok(Json(MessageResponse::updated(item, price)))
}

/// Handler for DELETE /delete?item=
pub async fn delete_handler(
    State(state): State<AppState>,
    Query(query): Query<ItemQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let item = query.item().map_err(ApiError::InvalidRequest)?;
    state
        .catalog
        .remove(item)
        .map_err(|err| item_error(item, err))?;
    info!(item, "item deleted");

    Ok(Json(MessageResponse::deleted(item)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.catalog.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

//! Request and response models for the catalog API

pub mod price;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use price::{Dollars, ParsePriceError};
pub use requests::{ItemQuery, PriceQuery};
pub use responses::{
    HealthResponse, ItemResponse, ListResponse, MessageResponse, StatsResponse,
};

//! Response DTOs for the catalog API

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::Dollars;

/// A single catalog item (GET /price, and each row of GET /list)
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub item: String,
    pub price: Dollars,
    /// Price rendered as `$12.34`
    pub display: String,
}

impl ItemResponse {
    pub fn new(item: impl Into<String>, price: Dollars) -> Self {
        Self {
            item: item.into(),
            price,
            display: price.to_string(),
        }
    }
}

/// Every resident item, sorted by name (GET /list)
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub items: Vec<ItemResponse>,
    pub count: usize,
}

impl ListResponse {
    pub fn new(mut items: Vec<ItemResponse>) -> Self {
        items.sort_by(|a, b| a.item.cmp(&b.item));
        Self {
            count: items.len(),
            items,
        }
    }
}

/// Confirmation for create, update and delete
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
    pub item: String,
}

impl MessageResponse {
    pub fn created(item: impl Into<String>, price: Dollars) -> Self {
        let item = item.into();
        Self {
            message: format!("item {} with price {} created successfully", item, price),
            item,
        }
    }

    pub fn updated(item: impl Into<String>, price: Dollars) -> Self {
        let item = item.into();
        Self {
            message: format!("item {} with price {} updated successfully", item, price),
            item,
        }
    }

    pub fn deleted(item: impl Into<String>) -> Self {
        let item = item.into();
        Self {
            message: format!("item {} deleted successfully", item),
            item,
        }
    }
}

/// Cache counters (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub total_entries: usize,
    pub capacity: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Health status (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current time, RFC 3339
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_response_display() {
        let resp = ItemResponse::new("shoes", Dollars(50.0));
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"item\":\"shoes\""));
        assert!(json.contains("$50.00"));
    }

    #[test]
    fn test_list_response_sorted() {
        let resp = ListResponse::new(vec![
            ItemResponse::new("socks", Dollars(5.0)),
            ItemResponse::new("hat", Dollars(12.0)),
            ItemResponse::new("shoes", Dollars(50.0)),
        ]);
        let names: Vec<&str> = resp.items.iter().map(|i| i.item.as_str()).collect();
        assert_eq!(names, vec!["hat", "shoes", "socks"]);
        assert_eq!(resp.count, 3);
    }

    #[test]
    fn test_message_responses() {
        assert_eq!(
            MessageResponse::created("hat", Dollars(3.0)).message,
            "item hat with price $3.00 created successfully"
        );
        assert!(MessageResponse::updated("hat", Dollars(4.0))
            .message
            .contains("updated"));
        assert_eq!(
            MessageResponse::deleted("hat").message,
            "item hat deleted successfully"
        );
    }

    #[test]
    fn test_stats_response_from_stats() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            total_entries: 10,
            capacity: 10,
        };
        let resp = StatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.capacity, 10);
    }

    #[test]
    fn test_health_response_serialize() {
        let json = serde_json::to_string(&HealthResponse::healthy()).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}

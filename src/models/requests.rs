//! Request DTOs for the catalog API
//!
//! All catalog routes take their input from the query string.

use serde::Deserialize;

use crate::models::Dollars;

/// Query for routes addressing a single item (`/price`, `/delete`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemQuery {
    #[serde(default)]
    pub item: String,
}

impl ItemQuery {
    /// Returns the item name, or an error message if it is blank.
    pub fn item(&self) -> Result<&str, String> {
        let item = self.item.trim();
        if item.is_empty() {
            return Err("item parameter is required".to_string());
        }
        Ok(item)
    }
}

/// Query for routes that set a price (`/create`, `/update`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceQuery {
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub price: String,
}

impl PriceQuery {
    /// Validates both parameters, returning the item name and parsed price.
    pub fn parse(&self) -> Result<(&str, Dollars), String> {
        let item = self.item.trim();
        if item.is_empty() || self.price.trim().is_empty() {
            return Err("item and price parameters are required".to_string());
        }
        let price = self.price.parse::<Dollars>().map_err(|e| e.to_string())?;
        Ok((item, price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_query_deserialize() {
        let query: ItemQuery = serde_json::from_str(r#"{"item": "shoes"}"#).unwrap();
        assert_eq!(query.item(), Ok("shoes"));
    }

    #[test]
    fn test_item_query_missing() {
        let query: ItemQuery = serde_json::from_str("{}").unwrap();
        assert!(query.item().is_err());
    }

    #[test]
    fn test_price_query_valid() {
        let query = PriceQuery {
            item: "hat".to_string(),
            price: "12.50".to_string(),
        };
        assert_eq!(query.parse(), Ok(("hat", Dollars(12.5))));
    }

    #[test]
    fn test_price_query_missing_price() {
        let query = PriceQuery {
            item: "hat".to_string(),
            price: String::new(),
        };
        assert_eq!(
            query.parse().unwrap_err(),
            "item and price parameters are required"
        );
    }

    #[test]
    fn test_price_query_bad_price() {
        let query = PriceQuery {
            item: "hat".to_string(),
            price: "cheap".to_string(),
        };
        assert_eq!(query.parse().unwrap_err(), "invalid price format: cheap");
    }
}

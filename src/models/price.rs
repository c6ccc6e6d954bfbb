//! Price type for catalog items

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// == Dollars ==
/// A non-negative price in dollars, displayed as `$12.34`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dollars(pub f32);

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// Returned when a query string is not a usable price.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid price format: {0}")]
pub struct ParsePriceError(String);

impl FromStr for Dollars {
    type Err = ParsePriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<f32>() {
            Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(Dollars(amount)),
            _ => Err(ParsePriceError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Dollars(50.0).to_string(), "$50.00");
        assert_eq!(Dollars(4.999).to_string(), "$5.00");
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!("12.5".parse::<Dollars>(), Ok(Dollars(12.5)));
        assert_eq!(" 3 ".parse::<Dollars>(), Ok(Dollars(3.0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "abc", "-1", "NaN", "inf"] {
            let err = input.parse::<Dollars>().unwrap_err();
            assert_eq!(err.to_string(), format!("invalid price format: {input}"));
        }
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Dollars(5.0)).unwrap(), "5.0");
    }
}

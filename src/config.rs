//! Configuration Module
//!
//! Loads server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Catalog server configuration.
///
/// Every value can be set through an environment variable; unparsable values
/// fall back to the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of items the catalog cache holds
    pub capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Whether to preload the starter catalog on startup
    pub seed_catalog: bool,
}

impl Config {
    /// Builds a Config from the environment.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cached items (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `SEED_CATALOG` - Preload `shoes` and `socks` (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env_or("CACHE_CAPACITY", defaults.capacity),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            seed_catalog: env_or("SEED_CATALOG", defaults.seed_catalog),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 1000,
            server_port: 8000,
            seed_catalog: true,
        }
    }
}

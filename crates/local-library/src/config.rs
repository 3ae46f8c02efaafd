//! # Configuration
//!
//! Read from the environment, after an optional `.env` file has been loaded.
//!
//! | Variable | Default | |
//! |---|---|---|
//! | `LIBRARY_ADDR` | `127.0.0.1:3000` | address the HTTP server binds |
//! | `LIBRARY_CHANNEL_CAPACITY` | `32` | request buffer of each collection, > 0 |
//! | `LIBRARY_SEED` | `true` | insert the sample library on startup |

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a socket address: {value:?}")]
    InvalidAddr { key: &'static str, value: String },

    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidCapacity { key: &'static str, value: String },

    #[error("{key} must be true or false, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub channel_capacity: usize,
    pub seed: bool,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        const ADDR: &str = "LIBRARY_ADDR";
        const CAPACITY: &str = "LIBRARY_CHANNEL_CAPACITY";
        const SEED: &str = "LIBRARY_SEED";

        let addr = lookup(ADDR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr { key: ADDR, value: addr.clone() })?;

        let channel_capacity = match lookup(CAPACITY) {
            None => DEFAULT_CHANNEL_CAPACITY,
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidCapacity { key: CAPACITY, value }),
            },
        };

        let seed = match lookup(SEED) {
            None => true,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidFlag { key: SEED, value }),
            },
        };

        Ok(Self {
            addr,
            channel_capacity,
            seed,
        })
    }
}

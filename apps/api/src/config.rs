//! Process configuration read from the environment
//!
//! | variable            | default        |
//! |---------------------|----------------|
//! | `BIND_ADDR`         | `0.0.0.0:3000` |
//! | `ITEMS_TABLE`       | `items_v1`     |
//! | `DYNAMODB_ENDPOINT` | unset          |
//! | `STRICT_UPDATE`     | `false`        |
//! | `JWT_SECRET`        | unset          |
//!
//! Empty values count as unset. AWS region and credentials are resolved
//! separately by the SDK.

use std::net::SocketAddr;

use thiserror::Error;

use crate::domain::repositories::UpdateMode;
use crate::infrastructure::repositories::DEFAULT_TABLE;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub table_name: String,
    /// Overrides the DynamoDB endpoint, e.g. `http://localhost:8000`
    pub dynamodb_endpoint: Option<String>,
    pub update_mode: UpdateMode,
    /// Enables bearer-token auth on the item routes when set
    pub jwt_secret: Option<String>,
}

impl AppConfig {
    /// Reads the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_addr = match get("BIND_ADDR") {
            Some(raw) => raw.parse::<SocketAddr>().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    key: "BIND_ADDR",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        };

        let update_mode = match get("STRICT_UPDATE") {
            Some(raw) => {
                if parse_bool("STRICT_UPDATE", &raw)? {
                    UpdateMode::Strict
                } else {
                    UpdateMode::Upsert
                }
            }
            None => UpdateMode::Upsert,
        };

        Ok(Self {
            bind_addr,
            table_name: get("ITEMS_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string()),
            dynamodb_endpoint: get("DYNAMODB_ENDPOINT"),
            update_mode,
            jwt_secret: get("JWT_SECRET"),
        })
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}

//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Base service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "sso".to_string(),
            host: "0.0.0.0".to_string(),
            port: 50051,
            log_level: "info".to_string(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://sso.db?mode=rwc".to_string(),
            max_connections: 10,
        }
    }
}

/// Token issuance configuration.
///
/// Signing secrets are per application and read from the apps store, not
/// from configuration; only the validity window lives here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Token time-to-live in hours
    pub ttl_hours: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            ttl_hours: domain::DEFAULT_TOKEN_TTL_HOURS,
        }
    }
}

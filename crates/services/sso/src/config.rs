//! SSO service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig, TokenConfig};
use domain::DEFAULT_TOKEN_TTL_HOURS;

/// SSO service configuration, assembled from environment variables.
///
/// Application signing secrets are not configuration; they live in the apps
/// store. Password hashing cost is wired in code (with cheap overrides in
/// tests) rather than exposed as an env knob.
#[derive(Debug, Clone)]
pub struct SsoServiceConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
    pub token: TokenConfig,
}

impl SsoServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "sso".to_string(),
                host: env::var("SSO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SSO_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(50051),
                log_level: env::var("SSO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("SSO_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or_else(|_| "sqlite://sso.db?mode=rwc".to_string()),
                max_connections: env::var("SSO_DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(10),
            },
            token: TokenConfig {
                ttl_hours: env::var("SSO_TOKEN_TTL_HOURS")
                    .ok()
                    .and_then(|h| h.parse().ok())
                    .unwrap_or(DEFAULT_TOKEN_TTL_HOURS),
            },
        }
    }
}

impl Default for SsoServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            database: DatabaseConfig::default(),
            token: TokenConfig::default(),
        }
    }
}

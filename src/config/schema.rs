//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the settlements web service.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings (bind address, limits, assets).
    pub server: ServerConfig,

    /// Where the settlement data set is read from.
    pub data: DataConfig,

    /// Chart aggregation settings.
    pub stats: StatsConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Security hardening.
    pub security: SecurityConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,

    /// Maximum buffered request body size in bytes.
    pub max_body_size: usize,

    /// Directory served under `/static`.
    pub static_dir: String,

    /// HTML page template rendered at `/`.
    pub template_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            request_timeout_secs: 30,
            max_body_size: 1024 * 1024, // 1MB
            static_dir: "web/static".to_string(),
            template_path: "web/templates/index.html".to_string(),
        }
    }
}

/// Data set configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the settlements CSV export.
    pub cities_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            cities_path: "data/cities.csv".to_string(),
        }
    }
}

/// Aggregation configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StatsConfig {
    /// Number of equal-width longitude buckets in the population chart.
    pub longitude_buckets: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            longitude_buckets: 100,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive when `RUST_LOG` is unset
    /// (e.g. "info" or "settlements_web=debug,tower_http=info").
    pub log_level: String,

    /// Pretty output for development, JSON for production.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "settlements_web=info,tower_http=info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SecurityConfig {
    /// Add security headers to routed responses.
    pub enable_headers: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
        }
    }
}

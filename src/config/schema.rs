//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! dispatcher. All types derive Serde traits for deserialization from config
//! files; every struct carries defaults so a partial file is enough.

use serde::{Deserialize, Serialize};

/// Root configuration for the dispatcher.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Environment label, reported in startup logs.
    pub env_name: String,

    /// Port for the plaintext listener.
    pub http_port: u16,

    /// Port for the TLS listener.
    pub https_port: u16,

    /// Certificate material for the TLS listener.
    pub tls: TlsConfig,

    /// Request size limits.
    pub limits: LimitsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// The default configuration is the staging environment.
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env_name: "staging".to_string(),
            http_port: 3000,
            https_port: 3001,
            tls: TlsConfig::default(),
            limits: LimitsConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl AppConfig {
    /// Built-in production environment.
    pub fn production() -> Self {
        Self {
            env_name: "production".to_string(),
            http_port: 5000,
            https_port: 5001,
            ..Self::default()
        }
    }

    /// Resolve a named environment. Unrecognized names fall back to staging.
    pub fn for_env(name: &str) -> Self {
        match name {
            "production" => Self::production(),
            _ => Self::default(),
        }
    }
}

/// TLS configuration for the encrypted listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            cert_path: "https/cert.pem".to_string(),
            key_path: "https/key.pem".to_string(),
        }
    }
}

/// Request size limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes. Bodies past this are rejected
    /// with 413 rather than buffered without bound.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

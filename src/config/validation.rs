//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (ports, limits, timeouts)
//! - Check the listener pair does not collide
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::AppConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error rather than stopping at
/// the first.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.http_port == 0 {
        errors.push(ValidationError {
            field: "http_port",
            message: "must be nonzero".to_string(),
        });
    }
    if config.https_port == 0 {
        errors.push(ValidationError {
            field: "https_port",
            message: "must be nonzero".to_string(),
        });
    }
    if config.http_port != 0 && config.http_port == config.https_port {
        errors.push(ValidationError {
            field: "https_port",
            message: format!("collides with http_port ({})", config.http_port),
        });
    }

    if config.tls.cert_path.is_empty() {
        errors.push(ValidationError {
            field: "tls.cert_path",
            message: "must not be empty".to_string(),
        });
    }
    if config.tls.key_path.is_empty() {
        errors.push(ValidationError {
            field: "tls.key_path",
            message: "must not be empty".to_string(),
        });
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError {
            field: "limits.max_body_bytes",
            message: "must be nonzero".to_string(),
        });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs",
            message: "must be nonzero".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError {
            field: "observability.log_level",
            message: format!(
                "unrecognized level {:?}, expected one of {:?}",
                config.observability.log_level, LOG_LEVELS
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AppConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the process configuration.
///
/// `CONFIG_PATH` names a TOML file and takes precedence; otherwise `APP_ENV`
/// selects one of the built-in environments (unrecognized values fall back to
/// staging).
pub fn resolve() -> Result<AppConfig, ConfigError> {
    if let Ok(path) = std::env::var("CONFIG_PATH") {
        return load_config(Path::new(&path));
    }

    let env_name = std::env::var("APP_ENV").unwrap_or_default();
    let config = AppConfig::for_env(&env_name);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_config(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn validation_errors_are_joined_in_display() {
        let mut config = AppConfig::default();
        config.http_port = 0;
        config.https_port = 0;
        let errors = validate_config(&config).unwrap_err();

        let message = ConfigError::Validation(errors).to_string();
        assert!(message.contains("http_port"));
        assert!(message.contains("https_port"));
    }
}

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CONFIG_PATH set:
//!     TOML file
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!
//! CONFIG_PATH unset:
//!     APP_ENV selects a named environment (staging | production)
//!     → built-in defaults for that environment
//!     → validation.rs
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::AppConfig;
pub use schema::LimitsConfig;
pub use schema::TimeoutConfig;
pub use schema::TlsConfig;

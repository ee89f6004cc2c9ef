//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PLANNING_POKER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use planning_poker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod realtime;
mod server;

pub use error::{ConfigError, ValidationError};
pub use realtime::RealtimeConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Plain port variable set by most hosting platforms.
const PORT_VAR: &str = "PORT";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// WebSocket fan-out and coordinator queue sizes
    #[serde(default)]
    pub realtime: RealtimeConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PLANNING_POKER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Lets a plain `PORT` variable override `server.port`
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PLANNING_POKER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PLANNING_POKER__SERVER__ENVIRONMENT=production` -> `server.environment`
    /// - `PLANNING_POKER__REALTIME__SEND_QUEUE_CAPACITY=64` -> `realtime.send_queue_capacity`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let port_override = std::env::var(PORT_VAR).ok().filter(|p| !p.trim().is_empty());

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PLANNING_POKER")
                    .separator("__"),
            )
            .set_override_option("server.port", port_override)?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.realtime.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

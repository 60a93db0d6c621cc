//! Configuration management for the Companion API
//!
//! Loads configuration from environment variables with sensible defaults.

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API server host
    pub api_host: String,

    /// API server port
    pub api_port: u16,

    /// Building manager login name
    pub manager_username: String,

    /// Building manager password
    // TODO: replace with a lookup against a credential store once accounts exist
    pub manager_password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8000,
            manager_username: "managername".to_string(),
            manager_password: "111111".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let config = Config {
            api_host: env::var("API_HOST").unwrap_or(defaults.api_host),

            api_port: match env::var("API_PORT") {
                Ok(port) => port.parse().context("Invalid API_PORT")?,
                Err(_) => defaults.api_port,
            },

            manager_username: env::var("MANAGER_USERNAME").unwrap_or(defaults.manager_username),

            manager_password: env::var("MANAGER_PASSWORD").unwrap_or(defaults.manager_password),
        };

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.api_port == 0 {
            anyhow::bail!("API_PORT must be greater than 0");
        }

        if self.manager_username.is_empty() {
            anyhow::bail!("MANAGER_USERNAME must not be empty");
        }

        Ok(())
    }

    /// Get the API server address
    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

//! Configuration management for the contact book.
//!
//! Configuration comes from the environment (a `.env` file is honored but
//! never required). The command protocol on stdin/stdout is the entire
//! user-facing surface; the environment only tunes ambient concerns.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for an interactive session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level for the stderr tracing output (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: one of `trace`, `debug`, `info`, `warn`, `error`
    ///   (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; never fails the startup path
        let _ = dotenvy::dotenv();

        let log_level = match env::var("LOG_LEVEL") {
            Ok(val) => {
                let val = val.to_lowercase();
                if !LOG_LEVELS.contains(&val.as_str()) {
                    return Err(ConfigError::InvalidValue {
                        var: "LOG_LEVEL".to_string(),
                        reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("/"), val),
                    });
                }
                val
            }
            Err(_) => "error".to_string(),
        };

        Ok(Config { log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
        }
    }
}

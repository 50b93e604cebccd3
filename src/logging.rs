use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{AppError, AppResult};

/// Diagnostics go to stderr; stdout carries only status lines.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "warn" or "lastseen=debug".
    pub level: String,
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: std::env::var("LASTSEEN_LOG").unwrap_or(defaults.level),
            json_format: std::env::var("LASTSEEN_LOG_JSON")
                .map(|v| v == "true")
                .unwrap_or(defaults.json_format),
        }
    }

    pub fn level<S: Into<String>>(mut self, level: S) -> Self {
        self.level = level.into();
        self
    }

    pub fn init(self) -> AppResult<()> {
        let filter = EnvFilter::try_new(&self.level).map_err(|err| {
            AppError::Configuration(format!("invalid log filter '{}': {err}", self.level))
        })?;
        let registry = tracing_subscriber::registry().with(filter);

        let result = if self.json_format {
            registry
                .with(fmt::layer().json().with_writer(io::stderr))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_writer(io::stderr).with_target(false))
                .try_init()
        };
        result.map_err(|err| AppError::Configuration(format!("failed to initialize logging: {err}")))
    }
}

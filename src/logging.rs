// ABOUTME: Logging configuration and structured logging setup for the plan engine
// ABOUTME: Configures log levels, formatters, and output destinations from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! Structured logging configuration for the composition root.
//!
//! The engine itself only emits `tracing` events; the wrapping service calls
//! [`init_logging`] once at startup to install a subscriber. Configuration is
//! environment-driven (`RUST_LOG`, `GRIT_LOG_FORMAT`, `GRIT_LOG_LOCATION`).

use std::env;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::{AppError, AppResult, ErrorCode};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON structured output for log aggregation
    Json,
    /// Human-readable output with colors
    Pretty,
    /// Compact single-line output
    Compact,
}

impl LogFormat {
    fn from_env() -> Self {
        match env::var("GRIT_LOG_FORMAT").as_deref() {
            Ok("json") => Self::Json,
            Ok("compact") => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "grit_engine=debug")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Build logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: LogFormat::from_env(),
            include_location: env::var("GRIT_LOG_LOCATION").as_deref() == Ok("true"),
        }
    }
}

/// Initialize the global tracing subscriber
///
/// # Errors
/// Returns `ConfigInvalid` if a subscriber is already installed or the level
/// filter cannot be parsed.
pub fn init_logging(config: &LoggingConfig) -> AppResult<()> {
    let filter = EnvFilter::try_new(&config.level).map_err(|e| {
        AppError::new(
            ErrorCode::ConfigInvalid,
            format!("invalid log filter '{}': {e}", config.level),
        )
    })?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_file(config.include_location)
                    .with_line_number(config.include_location),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_file(config.include_location)
                    .with_line_number(config.include_location),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_file(config.include_location)
                    .with_line_number(config.include_location),
            )
            .try_init(),
    };

    result.map_err(|e| {
        AppError::new(
            ErrorCode::ConfigInvalid,
            format!("failed to install tracing subscriber: {e}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.include_location);
    }
}

// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::Result;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads a required environment variable.
///
/// # Behavior
/// - Fails fast if the variable is missing
/// - Produces a clear, human-readable error message
/// - Intended for startup-time configuration validation
macro_rules! required_env {
    // ---
    ($key:literal) => {
        std::env::var($key)
            .map_err(|_| anyhow::anyhow!(concat!("Missing required configuration: ", $key)))?
    };
}

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails due to a missing
/// required environment variable.
macro_rules! assert_missing_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string()
                .contains(concat!("Missing required configuration: ", $key)),
            "unexpected error: {err}"
        );
    }};
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub responses: responses::ResponseConfig,
    pub server: server::ServerConfig,
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any required configuration is missing or invalid.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            responses: responses::ResponseConfig::from_env()?,
            server: server::ServerConfig::from_env(),
        })
    }
}

// ============================================================
// Response envelope configuration
// ============================================================

mod responses {
    // ---
    use super::*;
    use crate::domain::DetailsPolicy;
    use anyhow::Context;

    /// How envelopes are built.
    #[derive(Debug, Clone)]
    pub struct ResponseConfig {
        /// Whether 500 responses expose the underlying error text.
        ///
        /// No default: a deployment must choose `redact` or `passthrough`.
        pub details_policy: DetailsPolicy,
    }

    impl ResponseConfig {
        /// Builds a [`ResponseConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if `ENVELOPE_DETAILS_POLICY` is missing or not a
        /// known policy.
        pub fn from_env() -> Result<Self> {
            // ---
            let raw = required_env!("ENVELOPE_DETAILS_POLICY");
            let details_policy = raw
                .parse::<DetailsPolicy>()
                .context("Invalid configuration: ENVELOPE_DETAILS_POLICY")?;

            Ok(Self { details_policy })
        }
    }
}
pub use responses::ResponseConfig;

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---
    use std::str::FromStr;

    /// Which metrics backend records response counters.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MetricsType {
        Noop,
        Prometheus,
    }

    impl FromStr for MetricsType {
        type Err = anyhow::Error;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "prom" | "prometheus" => Ok(MetricsType::Prometheus),
                "noop" => Ok(MetricsType::Noop),
                other => Err(anyhow::anyhow!("unknown metrics type '{other}'")),
            }
        }
    }

    /// Listener and observability settings for the demo service.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Socket address to bind. Defaults to `127.0.0.1:8080`.
        pub bind_addr: String,

        /// Metrics backend. Defaults to no-op.
        pub metrics_type: MetricsType,
    }

    impl ServerConfig {
        /// Builds a [`ServerConfig`] from environment variables. All fields
        /// are optional.
        pub fn from_env() -> Self {
            // ---
            let bind_addr = std::env::var("ENVELOPE_BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string());
            let metrics_type =
                optional_env_parse!("ENVELOPE_METRICS_TYPE", MetricsType, MetricsType::Noop);

            Self {
                bind_addr,
                metrics_type,
            }
        }
    }
}
pub use server::{MetricsType, ServerConfig};

// ============================================================
// Tests
// ============================================================

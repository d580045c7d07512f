//! Server configuration parsed from environment variables.
//!
//! Required only for the chosen sink:
//! - `webhook`: `VOLUNTEER_WEBHOOK_URL`
//! - `email`: `RESEND_API_KEY`, `RESEND_FROM`, `VOLUNTEER_NOTIFY_EMAIL`
//!
//! Optional:
//! - `PORT`: default 3000
//! - `BIND_ADDR`: default `0.0.0.0`
//! - `VOLUNTEER_SINK`: `log` (default), `webhook`, or `email`
//! - `SUBMIT_DELAY_MS`: artificial latency before delivery, default 0
//! - `WEBHOOK_TIMEOUT_SECS`: default 10

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var: {var}")]
    Missing { var: &'static str },
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
    #[error("unknown VOLUNTEER_SINK: {0} (expected 'log', 'webhook', or 'email')")]
    UnknownSink(String),
}

/// Where accepted applications are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkConfig {
    /// Log the application and acknowledge it.
    Log,
    /// POST the application as JSON to an external endpoint.
    Webhook { url: String, timeout: Duration },
    /// Email a summary through Resend.
    Email { api_key: String, from: String, to: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub sink: SinkConfig,
    pub submit_delay: Duration,
}

impl ServerConfig {
    /// Build typed config from the process environment (after `.env` loading).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unparsable numbers, an unknown sink, or a
    /// missing variable required by the chosen sink.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let delay_ms = parse_or("SUBMIT_DELAY_MS", lookup("SUBMIT_DELAY_MS"), 0_u64)?;
        let sink = parse_sink(&lookup)?;

        Ok(Self { bind_addr, port, sink, submit_delay: Duration::from_millis(delay_ms) })
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<String, ConfigError> {
    lookup(var)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing { var })
}

fn parse_sink(lookup: &impl Fn(&str) -> Option<String>) -> Result<SinkConfig, ConfigError> {
    let kind = lookup("VOLUNTEER_SINK").unwrap_or_else(|| "log".to_owned());
    match kind.trim().to_ascii_lowercase().as_str() {
        "log" => Ok(SinkConfig::Log),
        "webhook" => {
            let url = require(lookup, "VOLUNTEER_WEBHOOK_URL")?;
            let secs = parse_or("WEBHOOK_TIMEOUT_SECS", lookup("WEBHOOK_TIMEOUT_SECS"), DEFAULT_WEBHOOK_TIMEOUT_SECS)?;
            Ok(SinkConfig::Webhook { url, timeout: Duration::from_secs(secs) })
        }
        "email" => Ok(SinkConfig::Email {
            api_key: require(lookup, "RESEND_API_KEY")?,
            from: require(lookup, "RESEND_FROM")?,
            to: require(lookup, "VOLUNTEER_NOTIFY_EMAIL")?,
        }),
        _ => Err(ConfigError::UnknownSink(kind)),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

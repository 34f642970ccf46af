//! Service configuration loaded from environment variables.
//!
//! All settings come from the environment (or a `.env` file via
//! `dotenvy`). Unset or malformed optional values fall back to defaults.

use std::net::SocketAddr;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable `fmt` output.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Capacity of the EventBus broadcast channel.
    pub event_bus_capacity: usize,

    /// Fixed seed for the draw. `None` draws from system entropy.
    pub draw_seed: Option<u64>,

    /// Log line format.
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            event_bus_capacity: 1024,
            draw_seed: None,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as a
    /// [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, std::net::AddrParseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(raw) => raw.trim().parse()?,
            None => defaults.listen_addr,
        };

        let event_bus_capacity = parse_or(&lookup, "EVENT_BUS_CAPACITY", defaults.event_bus_capacity);
        let draw_seed = lookup("DRAW_SEED").and_then(|v| v.trim().parse().ok());
        let log_format = lookup("LOG_FORMAT")
            .and_then(|v| LogFormat::parse(&v))
            .unwrap_or(defaults.log_format);

        Ok(Self {
            listen_addr,
            event_bus_capacity,
            draw_seed,
            log_format,
        })
    }
}

/// Parses `key` as `T`, returning `default` on missing or invalid values.
fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

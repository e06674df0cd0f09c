//! Configuration loader and defaults for the colorweb server.
//!
//! Exposes `ServerConfig`, which reads the listening port and display color
//! from environment variables (with sensible defaults) once at startup. The
//! resolved config is immutable and injected into the router as shared
//! state; request handlers never touch the environment.
//!
use std::env;

use thiserror::Error;

/// Default listening port when `PORT` is unset or empty
const DEFAULT_PORT: u16 = 3000;

/// Default display color when `COLOR` is unset or empty
const DEFAULT_COLOR: &str = "blue";

/// Immutable (port, color) pair resolved once at process start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port the server listens on
    pub port: u16,
    /// Color name interpolated into the greeting body
    pub color: String,
}

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}: expected a TCP port number (1-65535)")]
    InvalidPort(String),
}

impl ServerConfig {
    /// Read `PORT` and `COLOR` from the environment, applying defaults.
    ///
    /// Absent or empty variables fall back silently; a non-empty `PORT`
    /// that does not parse as a port number is a startup error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(env::var("PORT").ok(), env::var("COLOR").ok())
    }

    fn resolve(port: Option<String>, color: Option<String>) -> Result<Self, ConfigError> {
        let port = match port.as_deref() {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        };

        let color = match color.as_deref() {
            None | Some("") => DEFAULT_COLOR.to_owned(),
            Some(value) => value.to_owned(),
        };

        Ok(ServerConfig { port, color })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::resolve(None, None).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.color, "blue");
    }

    #[test]
    fn defaults_when_empty() {
        let config = ServerConfig::resolve(Some(String::new()), Some(String::new())).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.color, "blue");
    }

    #[test]
    fn explicit_values() {
        let config =
            ServerConfig::resolve(Some("8080".into()), Some("green".into())).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.color, "green");
    }

    #[test]
    fn color_taken_verbatim() {
        // No trimming, escaping, or allow-list.
        let config = ServerConfig::resolve(None, Some(" <script> ".into())).unwrap();
        assert_eq!(config.color, " <script> ");
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = ServerConfig::resolve(Some("eighty".into()), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        assert!(ServerConfig::resolve(Some("70000".into()), None).is_err());
    }
}

//! Launcher configuration from the process environment.

use std::env;

/// Environment variable naming the TCP port the server should listen on.
pub const PORT_VAR: &str = "PORT";

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: &str = "8000";

/// Runtime configuration for the launcher.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the server is told to bind. Kept as a string: the value is
    /// handed to the server verbatim, and the server rejects malformed
    /// input itself.
    pub port: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            port: resolve_port(env::var(PORT_VAR).ok()),
        }
    }
}

/// Unset and empty both fall back to the default.
fn resolve_port(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => DEFAULT_PORT.to_string(),
    }
}

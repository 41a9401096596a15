//! Server process invocation and lifecycle.
//!
//! The launcher owns exactly one child: the ASGI server. It spawns it in
//! the foreground with inherited stdio and waits until it exits. Failure
//! handling for a bad port, a busy port, or a missing app module lives in
//! the server itself; the launcher only surfaces what the child reports.

use std::process::{ExitStatus, Stdio};

use thiserror::Error;
use tokio::process::{Child, Command};
use tracing::{debug, info};

use crate::config::Config;

/// ASGI server program, resolved on PATH.
pub const SERVER_PROGRAM: &str = "uvicorn";

/// Application object the server imports and serves.
pub const APP_MODULE: &str = "api:app";

/// Bind address covering every interface of the host.
pub const BIND_HOST: &str = "0.0.0.0";

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed waiting for server process: {0}")]
    Wait(#[from] std::io::Error),
}

/// A fully-specified server invocation.
#[derive(Debug, Clone)]
pub struct ServerCommand {
    program: String,
    app: String,
    host: String,
    port: String,
}

impl ServerCommand {
    /// The production invocation: uvicorn serving `api:app` on all
    /// interfaces.
    pub fn uvicorn(config: &Config) -> Self {
        Self::new(SERVER_PROGRAM, APP_MODULE, BIND_HOST, &config.port)
    }

    pub fn new(program: &str, app: &str, host: &str, port: &str) -> Self {
        Self {
            program: program.to_string(),
            app: app.to_string(),
            host: host.to_string(),
            port: port.to_string(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Argument vector in uvicorn CLI form. The port is interpolated
    /// verbatim, numeric or not.
    pub fn args(&self) -> Vec<String> {
        vec![
            self.app.clone(),
            "--host".to_string(),
            self.host.clone(),
            "--port".to_string(),
            self.port.clone(),
        ]
    }
}

/// Handle to the spawned server process.
pub struct ServerProcess {
    child: Child,
}

impl ServerProcess {
    /// Spawn the server in the foreground. Stdio is inherited so the
    /// server's own output reaches the terminal unwrapped.
    pub fn spawn(command: &ServerCommand) -> Result<Self, LaunchError> {
        debug!(program = %command.program, args = ?command.args(), "Spawning server process");

        let child = Command::new(&command.program)
            .args(command.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        info!(program = %command.program, port = %command.port, "Server process started");

        Ok(Self { child })
    }

    /// Wait for the server to exit. The launcher has no cancellation or
    /// restart of its own; this returns only when the server terminates.
    pub async fn wait(mut self) -> Result<ExitStatus, LaunchError> {
        let status = self.child.wait().await?;
        info!(exit_code = ?status.code(), "Server process exited");
        Ok(status)
    }
}

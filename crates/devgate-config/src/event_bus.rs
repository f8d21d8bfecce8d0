//! Resolution of the message-bus bootstrap address.
//!
//! Operators either configure the bus address directly or point the gateway
//! at a shell script that prints the broker host. The script form mirrors
//! clustered deployments where the broker address is only known at runtime.

use std::fmt;
use std::io;
use std::process::{Command, ExitStatus};

use thiserror::Error;

const SHELL: &str = "/bin/sh";

/// Where the gateway obtains the message-bus bootstrap address from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventBusSource {
    /// A `host:port` address supplied verbatim.
    Direct(String),
    /// A script whose first output line is the broker host.
    Script {
        /// Path to the script, executed with `/bin/sh`.
        path: String,
        /// Port appended to the host printed by the script.
        port: u16,
    },
}

/// Errors raised while resolving the bus address.
#[derive(Debug, Error)]
pub enum EventBusError {
    /// The discovery script could not be started.
    #[error("failed to run event bus script '{path}': {source}")]
    Spawn {
        path: String,
        #[source]
        source: io::Error,
    },
    /// The discovery script exited unsuccessfully.
    #[error("event bus script '{path}' exited with {status}")]
    Status { path: String, status: ExitStatus },
    /// The discovery script printed no host.
    #[error("event bus script '{path}' printed no host")]
    EmptyOutput { path: String },
}

impl EventBusSource {
    /// Produces the `host:port` bootstrap address.
    ///
    /// # Errors
    ///
    /// Returns an [`EventBusError`] when the discovery script cannot be run,
    /// fails, or prints nothing.
    pub fn resolve(&self) -> Result<String, EventBusError> {
        match self {
            Self::Direct(address) => Ok(address.clone()),
            Self::Script { path, port } => run_script(path, *port),
        }
    }
}

impl fmt::Display for EventBusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(address) => f.write_str(address),
            Self::Script { path, port } => write!(f, "script:{path} (port {port})"),
        }
    }
}

fn run_script(path: &str, port: u16) -> Result<String, EventBusError> {
    let output = Command::new(SHELL)
        .arg(path)
        .output()
        .map_err(|source| EventBusError::Spawn {
            path: path.to_owned(),
            source,
        })?;
    if !output.status.success() {
        return Err(EventBusError::Status {
            path: path.to_owned(),
            status: output.status,
        });
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let host = stdout.lines().next().map(str::trim).unwrap_or_default();
    if host.is_empty() {
        return Err(EventBusError::EmptyOutput {
            path: path.to_owned(),
        });
    }
    Ok(format!("{host}:{port}"))
}

//! Defines the unified error surface for gateway launch and supervision.

use thiserror::Error;

use crate::bootstrap::BootstrapError;
use crate::transport::ListenerError;

use super::shutdown::ShutdownError;

/// Errors surfaced while launching or running the gateway process.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Installing the interrupt watcher failed.
    #[error(transparent)]
    Shutdown(#[from] ShutdownError),
    /// Bootstrap failed before the gateway could serve.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
    /// The accept loop failed while serving.
    #[error("command listener failed: {0}")]
    Listener(#[from] ListenerError),
}

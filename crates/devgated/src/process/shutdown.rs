use std::io;
use std::process;
use std::thread;

use signal_hook::consts::signal::SIGINT;
use signal_hook::iterator::Signals;
use thiserror::Error;
use tracing::warn;

use super::{INTERRUPT_EXIT_CODE, PROCESS_TARGET};

/// Abstraction over interrupt handling so launch tests stay in-process.
pub trait InterruptWatcher: Send + Sync {
    /// Installs the watcher. Returns once the watcher is armed.
    fn install(&self) -> Result<(), ShutdownError>;
}

/// Errors reported while arming the interrupt watcher.
#[derive(Debug, Error)]
pub enum ShutdownError {
    /// Installing signal handlers failed.
    #[error("failed to install signal handlers: {source}")]
    Install {
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The watcher thread could not be spawned.
    #[error("failed to spawn signal watcher thread: {source}")]
    Thread {
        #[source]
        source: io::Error,
    },
}

/// Watcher that terminates the process on the first interrupt.
///
/// Connections are served inline, so an interrupt cannot be folded into the
/// accept loop; the process exits with [`INTERRUPT_EXIT_CODE`] instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterruptWatcher;

impl InterruptWatcher for SystemInterruptWatcher {
    fn install(&self) -> Result<(), ShutdownError> {
        let mut signals =
            Signals::new([SIGINT]).map_err(|source| ShutdownError::Install { source })?;
        thread::Builder::new()
            .name(String::from("devgated-signals"))
            .spawn(move || {
                if let Some(signal) = signals.forever().next() {
                    warn!(
                        target: PROCESS_TARGET,
                        signal,
                        exit_code = INTERRUPT_EXIT_CODE,
                        "interrupt detected"
                    );
                    process::exit(INTERRUPT_EXIT_CODE);
                }
            })
            .map(|_| ())
            .map_err(|source| ShutdownError::Thread { source })
    }
}

//! Process supervision: interrupt handling and the gateway launch sequence.

mod errors;
pub(crate) mod launch;
pub(crate) mod shutdown;

pub use errors::LaunchError;
pub use launch::run_gateway;

pub(crate) const PROCESS_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::process");

/// Exit status used when an interrupt terminates the gateway.
pub(crate) const INTERRUPT_EXIT_CODE: i32 = 1;

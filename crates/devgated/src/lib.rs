//! Line-oriented TCP gateway for a remote device-management service.
//!
//! Clients open a connection, send one text command such as
//! `attach 10.0.0.1:8888:30`, and receive a single response terminated by
//! `"\n;"`. Each command is validated locally, translated into one or more
//! calls on the [`remote::DeviceManager`] interface, and the per-record
//! outcomes are joined into the response. Connections are served one at a
//! time in arrival order.
//!
//! Startup runs a fixed bootstrap sequence: configuration is loaded through
//! [`devgate_config`], structured telemetry is installed, the remote service is
//! dialled, an optional event listener subscribes to the message bus, and the
//! command listener binds. Any failure along the way is fatal and reported
//! through the [`HealthReporter`] hooks before it is returned.
//!
//! The `QUIT` command stops the accept loop and lets the process exit
//! cleanly; an interrupt terminates it with a non-zero status.

mod bootstrap;
mod dispatch;
mod events;
mod grammar;
mod health;
mod process;
pub mod remote;
mod telemetry;
mod transport;

pub use bootstrap::{
    BootstrapError, ConfigLoader, Gateway, StaticConfigLoader, SystemConfigLoader, bootstrap_with,
};
pub use events::{BusSubscriber, EventError, EventMessage, EventStream, EventSubscriber};
pub use health::{HealthReporter, StructuredHealthReporter};
pub use process::{LaunchError, run_gateway};
pub use telemetry::{TelemetryError, TelemetryHandle};
pub use transport::ListenerError;

#[cfg(test)]
mod tests;

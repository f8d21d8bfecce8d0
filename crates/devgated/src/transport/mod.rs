//! TCP listener for the gateway's line protocol.
//!
//! The listener accepts connections on a background thread and hands each one
//! to a [`ConnectionHandler`] before accepting the next, so requests are
//! processed strictly in arrival order.

mod errors;
mod handler;
mod listener;
#[cfg(test)]
mod test_utils;

pub use self::errors::ListenerError;
pub(crate) use self::handler::{ConnectionHandler, ConnectionStream, SessionControl};
pub(crate) use self::listener::SocketListener;
#[cfg(test)]
pub(crate) use self::test_utils::{CountingHandler, StopOnNth};

const LISTENER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::transport");

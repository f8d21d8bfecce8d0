//! Line-protocol dispatch for the command gateway.
//!
//! Clients send one line per connection:
//!
//! ```text
//! <command-name>[ <record>[ <record>...]]\n
//! ```
//!
//! where each record is a `:`-separated list of fields. The gateway answers
//! with one line of space-joined fragments terminated by `"\n;"`:
//!
//! ```text
//! 10.0.0.1:8888 attached invalid command 10.0.0.2:8888
//! ;
//! ```
//!
//! Every failure (malformed input, unknown command, remote error) is rendered
//! into the response; nothing closes the session early. `QUIT` is answered
//! with `QUIT` and stops the gateway.

mod commands;
mod errors;
mod handler;
mod response;
mod router;

pub(crate) use self::handler::DispatchConnectionHandler;
pub(crate) use self::router::CommandRouter;

//! Command routing for the line protocol.
//!
//! The router looks a request line up in the grammar table, checks its shape,
//! runs the matching handler once per record and folds every outcome into a
//! single [`ResponseLine`]. Nothing here fails: malformed input, unknown
//! commands and remote errors all become response fragments.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::grammar::{InvalidReason, RawCommand};
use crate::remote::DeviceManager;
use crate::transport::SessionControl;

use super::commands::{self, CommandResult, CommandSpec, Handler};
use super::errors::DispatchError;
use super::response::ResponseLine;

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Routes request lines to command handlers.
#[derive(Clone)]
pub(crate) struct CommandRouter {
    devices: Arc<dyn DeviceManager>,
}

impl CommandRouter {
    pub(crate) fn new(devices: Arc<dyn DeviceManager>) -> Self {
        Self { devices }
    }

    /// Executes one request line and reports whether the session continues.
    pub(crate) fn route(&self, line: &str) -> (ResponseLine, SessionControl) {
        let command = RawCommand::parse(line);
        let Some(spec) = commands::lookup(command.name()) else {
            return (
                reject(&command, InvalidReason::UnknownCommand),
                SessionControl::Continue,
            );
        };
        debug!(
            target: DISPATCH_TARGET,
            command = spec.name,
            "dispatching command"
        );
        match spec.handler {
            Handler::Stop => (ResponseLine::text(spec.name), SessionControl::Stop),
            Handler::ListCommands => (
                ResponseLine::text(commands::usage_text()),
                SessionControl::Continue,
            ),
            Handler::Bare(handler) => (
                self.run_bare(&command, spec, handler),
                SessionControl::Continue,
            ),
            Handler::Record(_) | Handler::Batch(_) => (
                self.run_records(&command, spec),
                SessionControl::Continue,
            ),
        }
    }

    fn run_bare(
        &self,
        command: &RawCommand<'_>,
        spec: &CommandSpec,
        handler: commands::BareHandler,
    ) -> ResponseLine {
        if command.has_payload() {
            return reject(command, InvalidReason::UnexpectedPayload);
        }
        let outcome = handler(&*self.devices);
        log_outcome(spec.name, &outcome);
        let mut response = ResponseLine::new();
        response.push_outcome(&outcome);
        response
    }

    fn run_records(&self, command: &RawCommand<'_>, spec: &CommandSpec) -> ResponseLine {
        if command.has_extra_records(spec.records) {
            return reject(command, InvalidReason::ExtraRecords);
        }
        let records = command.records(spec.records);
        if records.is_empty() || !command.has_payload() {
            return reject(command, InvalidReason::MissingPayload);
        }
        let outcomes = match spec.handler {
            Handler::Batch(handler) => handler(&*self.devices, spec.arity, &records),
            Handler::Record(handler) => records
                .iter()
                .map(|record| {
                    if spec.arity.accepts(record.len()) {
                        handler(&*self.devices, record)
                    } else {
                        Err(DispatchError::field_count(record, spec.arity))
                    }
                })
                .collect(),
            Handler::Bare(_) | Handler::ListCommands | Handler::Stop => Vec::new(),
        };
        let mut response = ResponseLine::new();
        for outcome in &outcomes {
            log_outcome(spec.name, outcome);
            response.push_outcome(outcome);
        }
        response
    }
}

/// Rejects the whole line, echoing it back.
fn reject(command: &RawCommand<'_>, reason: InvalidReason) -> ResponseLine {
    let outcome: CommandResult = Err(DispatchError::invalid(command.line(), reason));
    log_outcome(command.name(), &outcome);
    let mut response = ResponseLine::new();
    response.push_outcome(&outcome);
    response
}

fn log_outcome(command: &str, outcome: &CommandResult) {
    match outcome {
        Ok(_) => debug!(target: DISPATCH_TARGET, command, "command succeeded"),
        Err(DispatchError::Remote(remote)) => error!(
            target: DISPATCH_TARGET,
            command,
            code = remote.code,
            message = %remote.message,
            "remote call failed"
        ),
        Err(DispatchError::InvalidCommand { raw, reason }) => warn!(
            target: DISPATCH_TARGET,
            command,
            raw = %raw,
            %reason,
            "invalid command"
        ),
        Err(other) => warn!(target: DISPATCH_TARGET, command, error = %other, "command failed"),
    }
}

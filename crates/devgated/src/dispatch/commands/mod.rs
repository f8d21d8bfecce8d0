//! The grammar table: one [`CommandSpec`] per command name.
//!
//! Each entry pairs the record shape a command accepts with the function that
//! builds its remote request and renders the outcome. The router validates
//! field counts against [`CommandSpec::arity`] before calling a
//! [`Handler::Record`] function, so those functions index fields freely.

mod access;
mod accounts;
mod devices;
mod events;
mod polling;
mod sensors;
mod system;
mod table;

use crate::grammar::{ArgumentRecord, Arity, RecordMode};
use crate::remote::DeviceManager;
use crate::remote::types::{Device, DeviceAccount};

use super::errors::DispatchError;

pub(crate) use self::table::{lookup, usage_text};

/// Outcome of one record: a success fragment or an error to render.
pub(crate) type CommandResult = Result<String, DispatchError>;

/// Handles one validated record.
pub(crate) type RecordHandler = fn(&dyn DeviceManager, &ArgumentRecord<'_>) -> CommandResult;

/// Handles every record of a line at once; responsible for its own validation.
pub(crate) type BatchHandler =
    fn(&dyn DeviceManager, Arity, &[ArgumentRecord<'_>]) -> Vec<CommandResult>;

/// Handles a command that takes no records.
pub(crate) type BareHandler = fn(&dyn DeviceManager) -> CommandResult;

#[derive(Clone, Copy)]
pub(crate) enum Handler {
    Record(RecordHandler),
    Batch(BatchHandler),
    Bare(BareHandler),
    /// Renders the usage text for every command.
    ListCommands,
    /// Echoes the command name and stops the gateway.
    Stop,
}

/// Grammar entry for a single command name.
#[derive(Clone, Copy)]
pub(crate) struct CommandSpec {
    pub(crate) name: &'static str,
    pub(crate) arity: Arity,
    pub(crate) records: RecordMode,
    pub(crate) summary: &'static str,
    pub(crate) usage: &'static str,
    pub(crate) handler: Handler,
}

impl CommandSpec {
    /// A command whose payload is exactly one record.
    const fn single(
        name: &'static str,
        arity: Arity,
        handler: RecordHandler,
        summary: &'static str,
        usage: &'static str,
    ) -> Self {
        Self {
            name,
            arity,
            records: RecordMode::Single,
            summary,
            usage,
            handler: Handler::Record(handler),
        }
    }

    /// A command repeating `handler` over space-separated records.
    const fn each(
        name: &'static str,
        arity: Arity,
        handler: RecordHandler,
        summary: &'static str,
        usage: &'static str,
    ) -> Self {
        Self {
            name,
            arity,
            records: RecordMode::Variable,
            summary,
            usage,
            handler: Handler::Record(handler),
        }
    }

    /// A command whose records are validated and executed together.
    const fn batch(
        name: &'static str,
        arity: Arity,
        handler: BatchHandler,
        summary: &'static str,
        usage: &'static str,
    ) -> Self {
        Self {
            name,
            arity,
            records: RecordMode::Variable,
            summary,
            usage,
            handler: Handler::Batch(handler),
        }
    }

    const fn local(
        name: &'static str,
        handler: Handler,
        summary: &'static str,
        usage: &'static str,
    ) -> Self {
        Self {
            name,
            arity: Arity::NoRecord,
            records: RecordMode::Single,
            summary,
            usage,
            handler,
        }
    }
}

/// Account-shaped request carrying the record's target and token.
fn account_for(record: &ArgumentRecord<'_>) -> DeviceAccount {
    DeviceAccount {
        ip_address: record.target().into(),
        user_token: record.field(2).to_owned(),
        ..DeviceAccount::default()
    }
}

/// Device-shaped request carrying the record's target and token.
fn device_for(record: &ArgumentRecord<'_>) -> Device {
    Device {
        ip_address: record.target().into(),
        device_account: Some(DeviceAccount {
            user_token: record.field(2).to_owned(),
            ..DeviceAccount::default()
        }),
        ..Device::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_request_carries_token_in_account() {
        let record = ArgumentRecord::parse("10.0.0.1:8888:tok");
        let device = device_for(&record);
        assert_eq!(device.ip_address, "10.0.0.1:8888");
        assert_eq!(
            device.device_account.map(|account| account.user_token),
            Some(String::from("tok"))
        );
    }
}

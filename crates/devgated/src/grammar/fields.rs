//! Typed field parsing and the reasons a record can be rejected.

use std::fmt;

use thiserror::Error;

use super::{Arity, FIELD_SEPARATOR};

/// `host:port` address of a managed device.
///
/// Rebuilt verbatim from two fields; nothing is resolved or validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeviceTarget {
    host: String,
    port: String,
}

impl DeviceTarget {
    pub(crate) fn new(host: &str, port: &str) -> Self {
        Self {
            host: host.to_owned(),
            port: port.to_owned(),
        }
    }
}

impl fmt::Display for DeviceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{FIELD_SEPARATOR}{}", self.host, self.port)
    }
}

impl From<DeviceTarget> for String {
    fn from(target: DeviceTarget) -> Self {
        target.to_string()
    }
}

/// Why a record failed validation. Logged, never sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum InvalidReason {
    #[error("unknown command")]
    UnknownCommand,
    #[error("missing payload")]
    MissingPayload,
    #[error("unexpected payload")]
    UnexpectedPayload,
    #[error("more than one record")]
    ExtraRecords,
    #[error("expected {expected}, got {actual}")]
    FieldCount { expected: Arity, actual: usize },
    #[error("'{value}' is not an unsigned integer")]
    Unsigned { value: String },
    #[error("'{value}' is not a boolean")]
    Boolean { value: String },
    #[error("empty event name")]
    EmptyEvent,
    #[error("{method} requires {expected}")]
    MethodPayload {
        method: String,
        expected: &'static str,
    },
}

pub(crate) fn parse_u32(value: &str) -> Result<u32, InvalidReason> {
    value.parse().map_err(|_| InvalidReason::Unsigned {
        value: value.to_owned(),
    })
}

pub(crate) fn parse_u64(value: &str) -> Result<u64, InvalidReason> {
    value.parse().map_err(|_| InvalidReason::Unsigned {
        value: value.to_owned(),
    })
}

/// Accepts the spellings operators already use in scripts.
pub(crate) fn parse_bool(value: &str) -> Result<bool, InvalidReason> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(InvalidReason::Boolean {
            value: value.to_owned(),
        }),
    }
}

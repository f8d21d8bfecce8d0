//! Errors produced while turning a request line into a response.
//!
//! Every variant is recoverable: the session loop renders it into the response
//! line and keeps serving.

use std::io;

use thiserror::Error;

use crate::grammar::{ArgumentRecord, Arity, InvalidReason};
use crate::remote::RemoteError;

/// Errors surfaced while parsing, validating or executing a command.
#[derive(Debug, Error)]
pub(crate) enum DispatchError {
    /// A record (or the whole line) failed validation.
    #[error("invalid command {raw}")]
    InvalidCommand { raw: String, reason: InvalidReason },

    /// An event subscription named no events.
    #[error("No valid event was given")]
    NoValidEvents,

    /// The remote service rejected the call.
    #[error("{0}")]
    Remote(#[from] RemoteError),

    /// Request exceeds the maximum allowed size.
    #[error("request too large: {size} bytes exceeds {max_size} byte limit")]
    RequestTooLarge { size: usize, max_size: usize },

    /// IO error during read or write.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl DispatchError {
    /// Creates an invalid command error for `raw` text.
    pub(crate) fn invalid(raw: impl Into<String>, reason: InvalidReason) -> Self {
        Self::InvalidCommand {
            raw: raw.into(),
            reason,
        }
    }

    /// Creates an invalid command error for a rejected record.
    pub(crate) fn invalid_record(record: &ArgumentRecord<'_>, reason: InvalidReason) -> Self {
        Self::invalid(record.raw(), reason)
    }

    /// Creates the error for a record with the wrong number of fields.
    pub(crate) fn field_count(record: &ArgumentRecord<'_>, expected: Arity) -> Self {
        Self::invalid_record(
            record,
            InvalidReason::FieldCount {
                expected,
                actual: record.len(),
            },
        )
    }

    /// Creates a request too large error.
    pub(crate) fn request_too_large(size: usize, max_size: usize) -> Self {
        Self::RequestTooLarge { size, max_size }
    }
}

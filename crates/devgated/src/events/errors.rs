use std::io;

use thiserror::Error;

use devgate_config::EventBusError;

/// Errors raised by the event listener.
#[derive(Debug, Error)]
pub enum EventError {
    /// The bus address could not be determined.
    #[error("failed to resolve event bus address: {source}")]
    Resolve {
        #[source]
        source: EventBusError,
    },
    /// The binary was built without a message-bus client.
    #[error("event bus {brokers} configured but devgated was built without the `kafka` feature")]
    Unsupported { brokers: String },
    /// Opening the subscription failed.
    #[error("failed to subscribe to topic '{topic}' on {brokers}: {message}")]
    Subscribe {
        brokers: String,
        topic: String,
        message: String,
    },
    /// Reading from an open subscription failed.
    #[error("failed to consume event: {message}")]
    Consume { message: String },
    /// The listener thread could not be started.
    #[error("failed to start event listener thread: {source}")]
    Thread {
        #[source]
        source: io::Error,
    },
}

impl From<EventBusError> for EventError {
    fn from(source: EventBusError) -> Self {
        Self::Resolve { source }
    }
}

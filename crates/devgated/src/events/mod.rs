//! Background listener that logs messages published on the event bus.
//!
//! The listener shares nothing with command dispatch. It only exists so
//! operators can see device events in the gateway log; a subscription that
//! cannot be opened at startup is fatal, later consume errors are logged.

mod errors;
#[cfg(feature = "kafka")]
mod kafka;
mod listener;

pub use self::errors::EventError;
pub(crate) use self::listener::EventListener;

pub(crate) const EVENTS_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::events");

/// One message read from the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMessage {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    pub payload: Vec<u8>,
}

/// An open subscription.
pub trait EventStream: Send {
    /// Blocks until the next message arrives.
    ///
    /// Returns `Ok(None)` once the stream is exhausted.
    fn next_event(&mut self) -> Result<Option<EventMessage>, EventError>;
}

/// Opens subscriptions on the message bus.
pub trait EventSubscriber: Send + Sync {
    /// Subscribes to the first partition of `topic` from its oldest message.
    fn subscribe(&self, brokers: &str, topic: &str) -> Result<Box<dyn EventStream>, EventError>;
}

/// Subscriber backed by the Kafka client when the `kafka` feature is enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct BusSubscriber;

impl EventSubscriber for BusSubscriber {
    #[cfg(feature = "kafka")]
    fn subscribe(&self, brokers: &str, topic: &str) -> Result<Box<dyn EventStream>, EventError> {
        kafka::subscribe(brokers, topic)
    }

    #[cfg(not(feature = "kafka"))]
    fn subscribe(&self, brokers: &str, _topic: &str) -> Result<Box<dyn EventStream>, EventError> {
        Err(EventError::Unsupported {
            brokers: brokers.to_owned(),
        })
    }
}

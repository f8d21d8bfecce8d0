//! Stand-ins for the remote service connector and the event bus subscriber.

use std::sync::{Arc, Mutex};

use devgate_config::Config;

use crate::events::{EventError, EventMessage, EventStream, EventSubscriber};
use crate::remote::{ConnectError, DeviceManager, MockDeviceManager, RemoteConnector};

/// Connector handing out a prepared mock, or failing when none is staged.
#[derive(Default)]
pub struct StubConnector {
    devices: Mutex<Option<MockDeviceManager>>,
}

impl StubConnector {
    pub fn with(devices: MockDeviceManager) -> Self {
        Self {
            devices: Mutex::new(Some(devices)),
        }
    }

    /// Connector whose connection attempt always fails.
    pub fn unreachable() -> Self {
        Self::default()
    }
}

impl RemoteConnector for StubConnector {
    fn connect(&self, config: &Config) -> Result<Arc<dyn DeviceManager>, ConnectError> {
        let staged = self.devices.lock().expect("connector mutex poisoned").take();
        match staged {
            Some(devices) => Ok(Arc::new(devices)),
            None => Err(ConnectError::Address {
                address: config.remote_address().to_owned(),
                source: invalid_endpoint_error(),
            }),
        }
    }
}

fn invalid_endpoint_error() -> tonic::transport::Error {
    tonic::transport::Endpoint::from_shared(String::from("http://bad host"))
        .expect_err("address with a space must be rejected")
}

/// Subscriber yielding a fixed list of messages, or refusing to subscribe.
#[derive(Debug, Default, Clone)]
pub struct StubSubscriber {
    messages: Vec<EventMessage>,
    refuse: bool,
}

impl StubSubscriber {
    /// Subscriber that delivers one message and then ends the stream.
    pub fn single(topic: &str) -> Self {
        Self {
            messages: vec![EventMessage {
                topic: topic.to_owned(),
                partition: 0,
                offset: 0,
                payload: b"{\"event\":\"ResourceAdded\"}".to_vec(),
            }],
            refuse: false,
        }
    }

    pub fn refusing() -> Self {
        Self {
            messages: Vec::new(),
            refuse: true,
        }
    }
}

struct ScriptedStream(std::vec::IntoIter<EventMessage>);

impl EventStream for ScriptedStream {
    fn next_event(&mut self) -> Result<Option<EventMessage>, EventError> {
        Ok(self.0.next())
    }
}

impl EventSubscriber for StubSubscriber {
    fn subscribe(&self, brokers: &str, topic: &str) -> Result<Box<dyn EventStream>, EventError> {
        if self.refuse {
            return Err(EventError::Subscribe {
                brokers: brokers.to_owned(),
                topic: topic.to_owned(),
                message: String::from("broker refused subscription"),
            });
        }
        Ok(Box::new(ScriptedStream(self.messages.clone().into_iter())))
    }
}

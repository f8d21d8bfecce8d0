//! Test double for [`HealthReporter`] that records lifecycle events for assertions.

use std::net::SocketAddr;
use std::sync::Mutex;

use devgate_config::Config;

use crate::bootstrap::BootstrapError;
use crate::health::HealthReporter;

/// Structured health events tracked during scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HealthEvent {
    BootstrapStarting,
    BootstrapSucceeded,
    /// Bootstrap failed with an error description.
    BootstrapFailed(String),
    RemoteConnected(String),
    EventListenerStarted { brokers: String, topic: String },
    ListenerReady(SocketAddr),
    StopRequested,
}

/// Records health events for assertions.
#[derive(Debug, Default)]
pub struct RecordingHealthReporter {
    events: Mutex<Vec<HealthEvent>>,
}

impl RecordingHealthReporter {
    /// Captures a copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<HealthEvent> {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .clone()
    }

    pub fn record(&self, event: HealthEvent) {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .push(event);
    }

    /// Description of the first recorded bootstrap failure.
    pub fn failure(&self) -> Option<String> {
        self.events().into_iter().find_map(|event| match event {
            HealthEvent::BootstrapFailed(message) => Some(message),
            _ => None,
        })
    }
}

impl HealthReporter for RecordingHealthReporter {
    fn bootstrap_starting(&self) {
        self.record(HealthEvent::BootstrapStarting);
    }

    fn bootstrap_succeeded(&self, _config: &Config) {
        self.record(HealthEvent::BootstrapSucceeded);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        self.record(HealthEvent::BootstrapFailed(error.to_string()));
    }

    fn remote_connected(&self, address: &str) {
        self.record(HealthEvent::RemoteConnected(address.to_owned()));
    }

    fn event_listener_started(&self, brokers: &str, topic: &str) {
        self.record(HealthEvent::EventListenerStarted {
            brokers: brokers.to_owned(),
            topic: topic.to_owned(),
        });
    }

    fn listener_ready(&self, address: SocketAddr) {
        self.record(HealthEvent::ListenerReady(address));
    }

    fn stop_requested(&self) {
        self.record(HealthEvent::StopRequested);
    }
}

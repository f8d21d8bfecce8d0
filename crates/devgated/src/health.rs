//! Structured health reporting for gateway lifecycle events.

use std::net::SocketAddr;
use std::sync::Arc;

use devgate_config::Config;

use crate::bootstrap::BootstrapError;

const HEALTH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::health");

/// Observer trait used to surface lifecycle events to telemetry sinks.
pub trait HealthReporter: Send + Sync {
    /// Invoked before configuration loading begins.
    fn bootstrap_starting(&self);

    /// Invoked after bootstrap completes successfully.
    fn bootstrap_succeeded(&self, config: &Config);

    /// Invoked when bootstrap fails.
    fn bootstrap_failed(&self, error: &BootstrapError);

    /// Invoked once the remote service connection is established.
    fn remote_connected(&self, address: &str);

    /// Invoked after the event listener thread starts.
    fn event_listener_started(&self, brokers: &str, topic: &str);

    /// Invoked once the command listener is bound.
    fn listener_ready(&self, address: SocketAddr);

    /// Invoked when a client asked the gateway to stop.
    fn stop_requested(&self);
}

impl<T> HealthReporter for Arc<T>
where
    T: HealthReporter + ?Sized,
{
    fn bootstrap_starting(&self) {
        (**self).bootstrap_starting();
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        (**self).bootstrap_succeeded(config);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        (**self).bootstrap_failed(error);
    }

    fn remote_connected(&self, address: &str) {
        (**self).remote_connected(address);
    }

    fn event_listener_started(&self, brokers: &str, topic: &str) {
        (**self).event_listener_started(brokers, topic);
    }

    fn listener_ready(&self, address: SocketAddr) {
        (**self).listener_ready(address);
    }

    fn stop_requested(&self) {
        (**self).stop_requested();
    }
}

/// Default reporter that records lifecycle events using `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredHealthReporter;

impl StructuredHealthReporter {
    /// Builds a new reporter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl HealthReporter for StructuredHealthReporter {
    fn bootstrap_starting(&self) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_starting",
            "starting gateway bootstrap"
        );
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_succeeded",
            listen_address = %config.listen_address(),
            remote_address = %config.remote_address(),
            log_filter = %config.log_filter(),
            log_format = ?config.log_format(),
            "gateway bootstrap completed"
        );
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        tracing::error!(
            target: HEALTH_TARGET,
            event = "bootstrap_failed",
            error = %error,
            "gateway bootstrap failed"
        );
    }

    fn remote_connected(&self, address: &str) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "remote_connected",
            address,
            "connected to device-management service"
        );
    }

    fn event_listener_started(&self, brokers: &str, topic: &str) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "event_listener_started",
            brokers,
            topic,
            "event listener started"
        );
    }

    fn listener_ready(&self, address: SocketAddr) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "listener_ready",
            %address,
            "command listener ready"
        );
    }

    fn stop_requested(&self) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "stop_requested",
            "stop requested by client"
        );
    }
}

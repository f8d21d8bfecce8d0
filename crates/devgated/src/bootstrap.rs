//! Gateway bootstrap orchestration.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use thiserror::Error;

use devgate_config::Config;

use crate::dispatch::{CommandRouter, DispatchConnectionHandler};
use crate::events::{EventError, EventListener, EventSubscriber};
use crate::health::HealthReporter;
use crate::remote::{ConnectError, DeviceManager, RemoteConnector};
use crate::telemetry::{self, TelemetryError, TelemetryHandle};
use crate::transport::{ListenerError, SocketListener};

/// Trait abstracting configuration loading for testability.
pub trait ConfigLoader: Send + Sync {
    /// Loads the gateway configuration.
    fn load(&self) -> Result<Config, Arc<OrthoError>>;
}

/// Loader that reads the process arguments, environment and config files.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConfigLoader;

impl ConfigLoader for SystemConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load_from_iter(env::args_os())
    }
}

/// Loader that always yields the configuration it was built with.
#[derive(Debug, Clone)]
pub struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(self.config.clone())
    }
}

/// Errors surfaced during bootstrap. All of them are fatal.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// Telemetry initialisation failed.
    #[error("failed to initialise telemetry: {source}")]
    Telemetry {
        /// Underlying telemetry error.
        #[source]
        source: TelemetryError,
    },
    /// The device-management service could not be reached.
    #[error("failed to connect to device-management service: {source}")]
    Remote {
        #[source]
        source: ConnectError,
    },
    /// The event listener could not subscribe.
    #[error("failed to start event listener: {source}")]
    EventBus {
        #[source]
        source: EventError,
    },
    /// The command listener could not bind.
    #[error("failed to bind command listener: {source}")]
    Listener {
        #[source]
        source: ListenerError,
    },
}

/// A bootstrapped gateway, bound and ready to serve.
pub struct Gateway {
    config: Config,
    telemetry: TelemetryHandle,
    devices: Arc<dyn DeviceManager>,
    listener: SocketListener,
    events: Option<EventListener>,
    reporter: Arc<dyn HealthReporter>,
}

impl Gateway {
    /// Accessor for the resolved configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Accessor for the telemetry handle, primarily useful for testing.
    #[must_use]
    pub fn telemetry(&self) -> TelemetryHandle {
        self.telemetry
    }

    /// Address the command listener is bound to.
    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.listener.local_addr()
    }

    /// Topic consumed by the event listener, when one is running.
    #[must_use]
    pub fn event_topic(&self) -> Option<&str> {
        self.events.as_ref().map(EventListener::topic)
    }

    /// Whether the event listener thread is still draining its subscription.
    #[must_use]
    pub fn event_listener_active(&self) -> bool {
        self.events
            .as_ref()
            .is_some_and(|listener| !listener.is_finished())
    }

    /// Serves connections one at a time until a client sends the stop command.
    ///
    /// # Errors
    ///
    /// Returns a [`ListenerError`] when the accept loop cannot start or its
    /// thread panics.
    pub fn serve(self) -> Result<(), ListenerError> {
        let address = self.local_addr();
        let router = CommandRouter::new(self.devices);
        let handler = Arc::new(DispatchConnectionHandler::new(
            router,
            self.config.read_timeout(),
        ));
        let mut handle = self.listener.start(handler)?;
        self.reporter.listener_ready(address);
        handle.join()?;
        if handle.stop_requested() {
            self.reporter.stop_requested();
        }
        Ok(())
    }
}

/// Bootstraps the gateway using the supplied collaborators.
///
/// Steps run in a fixed order: configuration, telemetry, the remote
/// connection, the optional event listener and finally the listener bind.
///
/// # Errors
///
/// Returns the first [`BootstrapError`] encountered; the reporter is told
/// about it before it is returned.
pub fn bootstrap_with(
    loader: &dyn ConfigLoader,
    reporter: Arc<dyn HealthReporter>,
    connector: &dyn RemoteConnector,
    subscriber: &dyn EventSubscriber,
) -> Result<Gateway, BootstrapError> {
    reporter.bootstrap_starting();
    let fail = |error: BootstrapError| {
        reporter.bootstrap_failed(&error);
        error
    };

    let config = loader
        .load()
        .map_err(|source| fail(BootstrapError::Configuration { source }))?;

    let telemetry = telemetry::initialise(&config)
        .map_err(|source| fail(BootstrapError::Telemetry { source }))?;

    let devices = connector
        .connect(&config)
        .map_err(|source| fail(BootstrapError::Remote { source }))?;
    reporter.remote_connected(config.remote_address());

    let events = start_event_listener(&config, subscriber, &*reporter)
        .map_err(|source| fail(BootstrapError::EventBus { source }))?;

    let listener = SocketListener::bind(config.listen_address())
        .map_err(|source| fail(BootstrapError::Listener { source }))?;

    reporter.bootstrap_succeeded(&config);
    Ok(Gateway {
        config,
        telemetry,
        devices,
        listener,
        events,
        reporter,
    })
}

fn start_event_listener(
    config: &Config,
    subscriber: &dyn EventSubscriber,
    reporter: &dyn HealthReporter,
) -> Result<Option<EventListener>, EventError> {
    let Some(source) = config.event_bus() else {
        return Ok(None);
    };
    let brokers = source.resolve()?;
    let stream = subscriber.subscribe(&brokers, config.event_topic())?;
    let listener = EventListener::start(stream, config.event_topic())?;
    reporter.event_listener_started(&brokers, config.event_topic());
    Ok(Some(listener))
}

//! Shared configuration for the device-management command gateway.
//!
//! Values are layered with `ortho_config`: built-in defaults, then a
//! `.devgate.toml` file (or the file named by `--config-path` /
//! `DEVGATE_CONFIG_PATH`), then `DEVGATE_*` environment variables, then
//! command-line flags.

mod defaults;
mod event_bus;
mod logging;

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_EVENT_BUS_PORT, DEFAULT_EVENT_TOPIC, DEFAULT_LISTEN_ADDRESS, DEFAULT_LOG_FILTER,
    DEFAULT_REMOTE_ADDRESS, default_event_topic, default_listen_address, default_log_filter,
    default_log_filter_string, default_log_format, default_remote_address,
};
pub use event_bus::{EventBusError, EventBusSource};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "DEVGATE_")]
pub struct Config {
    /// TCP address the command listener binds to.
    #[ortho_config(default = crate::defaults::default_listen_address())]
    pub listen_address: String,
    /// Endpoint of the remote device-management service.
    #[ortho_config(default = crate::defaults::default_remote_address())]
    pub remote_address: String,
    /// Optional deadline applied to every remote call.
    pub remote_timeout_secs: Option<u64>,
    /// Optional deadline for reading a client's command line.
    pub read_timeout_secs: Option<u64>,
    /// Message-bus bootstrap address (`host:port`).
    pub event_bus: Option<String>,
    /// Script printing the message-bus host; used when `event_bus` is unset.
    pub event_bus_script: Option<String>,
    /// Port appended to the host printed by `event_bus_script`.
    #[ortho_config(default = crate::defaults::DEFAULT_EVENT_BUS_PORT)]
    pub event_bus_port: u16,
    /// Topic whose messages are logged.
    #[ortho_config(default = crate::defaults::default_event_topic())]
    pub event_topic: String,
    /// Filter expression for the tracing subscriber.
    #[ortho_config(default = crate::defaults::default_log_filter_string())]
    pub log_filter: String,
    /// Output format for the tracing subscriber.
    #[ortho_config(default = crate::defaults::default_log_format())]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            remote_address: default_remote_address(),
            remote_timeout_secs: None,
            read_timeout_secs: None,
            event_bus: None,
            event_bus_script: None,
            event_bus_port: DEFAULT_EVENT_BUS_PORT,
            event_topic: default_event_topic(),
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn listen_address(&self) -> &str {
        &self.listen_address
    }

    #[must_use]
    pub fn remote_address(&self) -> &str {
        &self.remote_address
    }

    /// Deadline for remote calls, if one is configured.
    #[must_use]
    pub fn remote_timeout(&self) -> Option<Duration> {
        self.remote_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Deadline for reading a client's command line, if one is configured.
    #[must_use]
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Source of the message-bus address, or `None` when the listener is off.
    ///
    /// A direct address takes precedence over the discovery script.
    #[must_use]
    pub fn event_bus(&self) -> Option<EventBusSource> {
        if let Some(address) = self.event_bus.as_deref().filter(|value| !value.is_empty()) {
            return Some(EventBusSource::Direct(address.to_owned()));
        }
        self.event_bus_script
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(|path| EventBusSource::Script {
                path: path.to_owned(),
                port: self.event_bus_port,
            })
    }

    #[must_use]
    pub fn event_topic(&self) -> &str {
        &self.event_topic
    }

    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

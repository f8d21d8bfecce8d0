use crate::logging::LogFormat;

/// Address the gateway listens on when nothing else is configured.
pub const DEFAULT_LISTEN_ADDRESS: &str = "127.0.0.1:9999";

/// Endpoint of the device-management service.
pub const DEFAULT_REMOTE_ADDRESS: &str = "http://127.0.0.1:31085";

/// Port appended to the host printed by the event-bus discovery script.
pub const DEFAULT_EVENT_BUS_PORT: u16 = 9092;

/// Topic whose messages are logged by the event listener.
pub const DEFAULT_EVENT_TOPIC: &str = "importer";

/// Default log filter expression used by the gateway.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn default_listen_address() -> String {
    DEFAULT_LISTEN_ADDRESS.to_owned()
}

pub fn default_remote_address() -> String {
    DEFAULT_REMOTE_ADDRESS.to_owned()
}

pub fn default_event_topic() -> String {
    DEFAULT_EVENT_TOPIC.to_owned()
}

/// Default log filter expression used by the gateway.
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the gateway.
pub fn default_log_format() -> LogFormat {
    LogFormat::Json
}

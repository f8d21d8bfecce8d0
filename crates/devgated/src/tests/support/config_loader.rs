//! Test configuration loaders for scenarios covering success and failure paths.

use std::ffi::OsString;
use std::sync::Arc;

use devgate_config::Config;
use ortho_config::{OrthoConfig, OrthoError};

use crate::bootstrap::ConfigLoader;

/// Loader binding an ephemeral loopback port so scenarios never collide.
#[derive(Debug, Clone)]
pub struct TestConfigLoader {
    event_bus: Option<String>,
}

impl TestConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self { event_bus: None }
    }

    /// Loader whose configuration enables the event listener.
    #[must_use]
    pub fn with_event_bus(brokers: &str) -> Self {
        Self {
            event_bus: Some(brokers.to_owned()),
        }
    }
}

impl ConfigLoader for TestConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(Config {
            listen_address: String::from("127.0.0.1:0"),
            read_timeout_secs: Some(5),
            event_bus: self.event_bus.clone(),
            ..Config::default()
        })
    }
}

/// Loader that fails by passing an unparsable flag value.
pub struct FailingConfigLoader;

impl ConfigLoader for FailingConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        let args = vec![
            OsString::from("devgated"),
            OsString::from("--remote-timeout-secs"),
            OsString::from("soon"),
        ];
        Config::load_from_iter(args)
    }
}

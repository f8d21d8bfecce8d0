//! Test harness utilities for the gateway behavioural suites.

mod collaborators;
mod config_loader;
mod reporter;
mod world;

pub use collaborators::{StubConnector, StubSubscriber};
pub use config_loader::{FailingConfigLoader, TestConfigLoader};
pub use reporter::{HealthEvent, RecordingHealthReporter};
pub use world::{TestWorld, exchange, world};

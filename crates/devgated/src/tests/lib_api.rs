//! Tests that exercise the crate's public re-exports.

use std::fs;
use std::sync::Arc;

use rstest::rstest;
use tempfile::TempDir;

use devgate_config::Config;

use crate::{BootstrapError, StaticConfigLoader, bootstrap_with};

use super::support::{
    HealthEvent, RecordingHealthReporter, StubConnector, StubSubscriber, TestConfigLoader,
};
use crate::remote::MockDeviceManager;

#[rstest]
fn bootstrap_with_reexport_binds_ephemeral_port() {
    let loader = TestConfigLoader::new();
    let reporter = Arc::new(RecordingHealthReporter::default());
    let connector = StubConnector::with(MockDeviceManager::new());

    let gateway = bootstrap_with(
        &loader,
        reporter.clone(),
        &connector,
        &StubSubscriber::default(),
    )
    .expect("bootstrap should succeed");

    assert_ne!(gateway.local_addr().port(), 0);
    assert!(!gateway.event_listener_active());
    let events = reporter.events();
    assert!(events.contains(&HealthEvent::BootstrapStarting));
    assert!(events.contains(&HealthEvent::RemoteConnected(String::from(
        gateway.config().remote_address()
    ))));
    assert!(events.contains(&HealthEvent::BootstrapSucceeded));
}

#[rstest]
fn static_loader_reports_bind_failures() {
    let loader = StaticConfigLoader::new(Config {
        listen_address: String::from("not-an-address"),
        ..Config::default()
    });
    let reporter = Arc::new(RecordingHealthReporter::default());
    let connector = StubConnector::with(MockDeviceManager::new());

    let Err(error) = bootstrap_with(
        &loader,
        reporter.clone(),
        &connector,
        &StubSubscriber::default(),
    ) else {
        panic!("binding an unresolvable address must fail");
    };

    assert!(matches!(error, BootstrapError::Listener { .. }));
    assert!(reporter.failure().is_some());
    assert!(!reporter.events().contains(&HealthEvent::BootstrapSucceeded));
}

#[rstest]
fn remote_failure_stops_before_bind() {
    let loader = TestConfigLoader::new();
    let reporter = Arc::new(RecordingHealthReporter::default());

    let result = bootstrap_with(
        &loader,
        reporter.clone(),
        &StubConnector::unreachable(),
        &StubSubscriber::default(),
    );

    assert!(matches!(result, Err(BootstrapError::Remote { .. })));
    let connected = reporter
        .events()
        .iter()
        .any(|event| matches!(event, HealthEvent::RemoteConnected(_)));
    assert!(!connected);
}

#[rstest]
fn event_bus_script_is_resolved_during_bootstrap() {
    let dir = TempDir::new().expect("create script directory");
    let script = dir.path().join("bus_ip.sh");
    fs::write(&script, "echo 10.9.8.7\n").expect("write script");
    let loader = StaticConfigLoader::new(Config {
        listen_address: String::from("127.0.0.1:0"),
        event_bus_script: Some(script.to_str().expect("utf8 script path").to_owned()),
        event_bus_port: 19092,
        ..Config::default()
    });
    let reporter = Arc::new(RecordingHealthReporter::default());
    let connector = StubConnector::with(MockDeviceManager::new());

    let gateway = bootstrap_with(
        &loader,
        reporter.clone(),
        &connector,
        &StubSubscriber::single("importer"),
    )
    .expect("bootstrap should succeed");

    assert_eq!(gateway.event_topic(), Some("importer"));
    assert!(
        reporter
            .events()
            .contains(&HealthEvent::EventListenerStarted {
                brokers: String::from("10.9.8.7:19092"),
                topic: String::from("importer"),
            })
    );
}

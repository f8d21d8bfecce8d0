//! BDD test world: owns the collaborators, the bootstrapped gateway and the
//! thread serving it.

use std::cell::RefCell;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::bootstrap::{BootstrapError, ConfigLoader, Gateway, bootstrap_with};
use crate::remote::MockDeviceManager;
use crate::transport::ListenerError;

use super::collaborators::{StubConnector, StubSubscriber};
use super::config_loader::{FailingConfigLoader, TestConfigLoader};
use super::reporter::RecordingHealthReporter;

/// Scenario world shared across BDD steps.
pub struct TestWorld {
    loader: Box<dyn ConfigLoader>,
    pub reporter: Arc<RecordingHealthReporter>,
    connector: StubConnector,
    subscriber: StubSubscriber,
    gateway: Option<Gateway>,
    bootstrap_error: Option<BootstrapError>,
    address: Option<SocketAddr>,
    serving: Option<JoinHandle<Result<(), ListenerError>>>,
    serve_result: Option<Result<(), String>>,
    last_response: Option<String>,
}

impl TestWorld {
    /// Builds a world with a healthy loader and a silent remote service.
    #[must_use]
    pub fn new() -> Self {
        Self {
            loader: Box::new(TestConfigLoader::new()),
            reporter: Arc::new(RecordingHealthReporter::default()),
            connector: StubConnector::with(MockDeviceManager::new()),
            subscriber: StubSubscriber::default(),
            gateway: None,
            bootstrap_error: None,
            address: None,
            serving: None,
            serve_result: None,
            last_response: None,
        }
    }

    pub fn use_failing_loader(&mut self) {
        self.loader = Box::new(FailingConfigLoader);
    }

    /// Enables the event listener with a subscriber delivering one message.
    pub fn use_event_bus(&mut self, brokers: &str) {
        self.loader = Box::new(TestConfigLoader::with_event_bus(brokers));
        self.subscriber = StubSubscriber::single("importer");
    }

    pub fn refuse_subscriptions(&mut self) {
        self.subscriber = StubSubscriber::refusing();
    }

    pub fn use_unreachable_remote(&mut self) {
        self.connector = StubConnector::unreachable();
    }

    pub fn use_devices(&mut self, devices: MockDeviceManager) {
        self.connector = StubConnector::with(devices);
    }

    /// Runs the bootstrap sequence once.
    pub fn bootstrap(&mut self) {
        if self.gateway.is_some() || self.bootstrap_error.is_some() {
            return;
        }
        match bootstrap_with(
            &*self.loader,
            self.reporter.clone(),
            &self.connector,
            &self.subscriber,
        ) {
            Ok(gateway) => {
                self.address = Some(gateway.local_addr());
                self.gateway = Some(gateway);
            }
            Err(error) => self.bootstrap_error = Some(error),
        }
    }

    /// Starts serving the bootstrapped gateway on a background thread.
    pub fn serve(&mut self) {
        self.bootstrap();
        if let Some(gateway) = self.gateway.take() {
            self.serving = Some(thread::spawn(move || gateway.serve()));
        }
    }

    /// Sends one command line and stores the raw response.
    pub fn send(&mut self, line: &str) {
        let address = self.address.expect("gateway not bootstrapped");
        self.last_response = Some(exchange(address, line));
    }

    /// Waits for the serving thread to return after a stop request.
    pub fn wait_for_stop(&mut self) {
        if let Some(handle) = self.serving.take() {
            let result = handle.join().expect("serving thread panicked");
            self.serve_result = Some(result.map_err(|error| error.to_string()));
        }
    }

    /// Whether a fresh connection to the gateway's address is refused.
    #[must_use]
    pub fn refuses_connections(&self) -> bool {
        self.address
            .is_some_and(|address| TcpStream::connect(address).is_err())
    }

    #[must_use]
    pub fn gateway(&self) -> Option<&Gateway> {
        self.gateway.as_ref()
    }

    #[must_use]
    pub fn bootstrap_error(&self) -> Option<&BootstrapError> {
        self.bootstrap_error.as_ref()
    }

    #[must_use]
    pub fn last_response(&self) -> Option<&str> {
        self.last_response.as_deref()
    }

    #[must_use]
    pub fn serve_result(&self) -> Option<&Result<(), String>> {
        self.serve_result.as_ref()
    }
}

impl Drop for TestWorld {
    fn drop(&mut self) {
        let (Some(address), Some(handle)) = (self.address, self.serving.take()) else {
            return;
        };
        if let Ok(mut stream) = TcpStream::connect(address) {
            let _ = stream.write_all(b"QUIT\n");
            let mut sink = String::new();
            let _ = stream.read_to_string(&mut sink);
        }
        let _ = handle.join();
    }
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Opens a connection, sends `line` and reads until the gateway closes it.
pub fn exchange(address: SocketAddr, line: &str) -> String {
    let mut stream = TcpStream::connect(address).expect("connect to gateway");
    stream
        .write_all(format!("{line}\n").as_bytes())
        .expect("send command");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .expect("read response");
    response
}

/// Creates a fresh world for each scenario.
#[must_use]
pub fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::new())
}

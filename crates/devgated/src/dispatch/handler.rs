//! Connection handler that serves one command line per connection.
//!
//! The handler reads a single bounded line, routes it, writes the terminated
//! response and tells the listener whether to keep accepting. A client that
//! disconnects before sending anything gets no response.

use std::io::{self, Read};
use std::time::Duration;

use tracing::{debug, warn};

use crate::transport::{ConnectionHandler, ConnectionStream, SessionControl};

use super::errors::DispatchError;
use super::response::ResponseWriter;
use super::router::{CommandRouter, DISPATCH_TARGET};

/// Maximum size of a single request line in bytes.
pub(crate) const MAX_REQUEST_BYTES: usize = 64 * 1024;

/// Connection handler that parses and dispatches text commands.
pub(crate) struct DispatchConnectionHandler {
    router: CommandRouter,
    read_timeout: Option<Duration>,
}

impl DispatchConnectionHandler {
    pub(crate) fn new(router: CommandRouter, read_timeout: Option<Duration>) -> Self {
        Self {
            router,
            read_timeout,
        }
    }

    fn dispatch(&self, mut stream: ConnectionStream) -> SessionControl {
        let peer = stream.peer();
        if let Err(error) = stream.set_read_timeout(self.read_timeout) {
            warn!(target: DISPATCH_TARGET, %error, "failed to apply read timeout");
        }

        let request_bytes = match read_request_line(&mut stream) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!(target: DISPATCH_TARGET, ?peer, "client disconnected without request");
                return SessionControl::Continue;
            }
            Err(error) => {
                warn!(target: DISPATCH_TARGET, %error, ?peer, "failed to read request");
                let mut writer = ResponseWriter::new(&mut stream);
                let _ = writer.write_error(&error);
                return SessionControl::Continue;
            }
        };

        let line = String::from_utf8_lossy(&request_bytes);
        let (response, control) = self.router.route(&line);

        let mut writer = ResponseWriter::new(&mut stream);
        if let Err(error) = writer.write_response(&response) {
            warn!(target: DISPATCH_TARGET, %error, ?peer, "failed to write response");
        }
        control
    }
}

impl ConnectionHandler for DispatchConnectionHandler {
    fn handle(&self, stream: ConnectionStream) -> SessionControl {
        self.dispatch(stream)
    }
}

/// Reads a bounded request line from the stream.
///
/// Returns `Ok(None)` if the client disconnects without sending data.
/// Returns `Ok(Some(bytes))` when a complete line (or EOF with partial data)
/// is received. Bytes after the first newline are ignored.
fn read_request_line<R: Read>(stream: &mut R) -> Result<Option<Vec<u8>>, DispatchError> {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];

    loop {
        let bytes_read = read_with_retry(stream, &mut chunk)?;

        if bytes_read == 0 {
            return Ok(if buffer.is_empty() {
                None
            } else {
                Some(buffer)
            });
        }

        if let Some(newline_pos) = chunk[..bytes_read].iter().position(|b| *b == b'\n') {
            buffer.extend_from_slice(&chunk[..=newline_pos]);
            enforce_limit(buffer.len())?;
            return Ok(Some(buffer));
        }

        buffer.extend_from_slice(&chunk[..bytes_read]);
        enforce_limit(buffer.len())?;
    }
}

/// Reads from the stream, retrying on interrupts.
fn read_with_retry<R: Read>(stream: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match stream.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Enforces the maximum request size limit.
fn enforce_limit(size: usize) -> Result<(), DispatchError> {
    if size > MAX_REQUEST_BYTES {
        return Err(DispatchError::request_too_large(size, MAX_REQUEST_BYTES));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};
    use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
    use std::sync::Arc;
    use std::thread::{self, JoinHandle};

    use rstest::{fixture, rstest};

    use crate::remote::MockDeviceManager;
    use crate::remote::types::DeviceListByIp;

    use super::*;

    /// TCP server/client pair driving one connection through the handler.
    struct HandlerTestHarness {
        client: TcpStream,
        server_handle: JoinHandle<SessionControl>,
    }

    impl HandlerTestHarness {
        fn start(devices: MockDeviceManager, read_timeout: Option<Duration>) -> Self {
            let (listener, addr) = create_listener();
            let handler =
                DispatchConnectionHandler::new(CommandRouter::new(Arc::new(devices)), read_timeout);
            let server_handle = thread::spawn(move || {
                let (stream, _) = listener.accept().expect("accept");
                handler.handle(ConnectionStream::new(stream))
            });
            let client = TcpStream::connect(addr).expect("connect");
            Self {
                client,
                server_handle,
            }
        }

        /// Sends request bytes and reads until the server closes.
        fn exchange(&mut self, request: &[u8]) -> String {
            self.client.write_all(request).expect("write request");
            self.client.flush().expect("flush");
            self.read_all()
        }

        fn read_all(&mut self) -> String {
            let mut response = String::new();
            self.client
                .read_to_string(&mut response)
                .expect("read response");
            response
        }

        fn join(self) -> SessionControl {
            self.server_handle.join().expect("server join")
        }
    }

    fn create_listener() -> (TcpListener, SocketAddr) {
        let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind");
        let addr = listener.local_addr().expect("addr");
        (listener, addr)
    }

    #[fixture]
    fn harness() -> HandlerTestHarness {
        HandlerTestHarness::start(MockDeviceManager::new(), None)
    }

    #[rstest]
    fn quit_is_answered_then_stops(mut harness: HandlerTestHarness) {
        assert_eq!(harness.exchange(b"QUIT\n"), "QUIT\n;");
        assert_eq!(harness.join(), SessionControl::Stop);
    }

    #[rstest]
    fn unknown_command_is_echoed(mut harness: HandlerTestHarness) {
        assert_eq!(
            harness.exchange(b"bogus 1:2:3\n"),
            "invalid command bogus 1:2:3\n;"
        );
        assert_eq!(harness.join(), SessionControl::Continue);
    }

    #[rstest]
    fn silent_client_gets_no_response(mut harness: HandlerTestHarness) {
        harness
            .client
            .shutdown(Shutdown::Write)
            .expect("close write half");
        assert_eq!(harness.read_all(), "");
        assert_eq!(harness.join(), SessionControl::Continue);
    }

    #[test]
    fn remote_listing_is_terminated() {
        let mut devices = MockDeviceManager::new();
        devices.expect_get_current_devices().times(1).returning(|| {
            Ok(DeviceListByIp {
                ip_address: vec![String::from("10.0.0.1:8888")],
            })
        });
        let mut harness = HandlerTestHarness::start(devices, None);
        assert_eq!(harness.exchange(b"showdevices\n"), "10.0.0.1:8888\n;");
        assert_eq!(harness.join(), SessionControl::Continue);
    }

    #[test]
    fn read_timeout_answers_with_error() {
        let mut harness =
            HandlerTestHarness::start(MockDeviceManager::new(), Some(Duration::from_millis(50)));
        let response = harness.read_all();
        assert!(response.starts_with("IO error"), "{response}");
        assert!(response.ends_with("\n;"));
        assert_eq!(harness.join(), SessionControl::Continue);
    }

    #[test]
    fn oversized_line_is_rejected() {
        let mut input = Cursor::new(vec![b'a'; MAX_REQUEST_BYTES + 1]);
        let error = read_request_line(&mut input).expect_err("request too large");
        assert!(matches!(error, DispatchError::RequestTooLarge { .. }));
    }

    #[rstest]
    #[case(b"showdevices".as_slice(), Some(b"showdevices".as_slice()))]
    #[case(b"QUIT\nextra".as_slice(), Some(b"QUIT\n".as_slice()))]
    #[case(b"".as_slice(), None)]
    fn request_line_stops_at_newline_or_eof(
        #[case] input: &[u8],
        #[case] expected: Option<&[u8]>,
    ) {
        let mut input = Cursor::new(input.to_vec());
        let line = read_request_line(&mut input).expect("read line");
        assert_eq!(line.as_deref(), expected);
    }
}

//! Thread that drains an [`EventStream`] into the log.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info, warn};

use super::{EVENTS_TARGET, EventError, EventMessage, EventStream};

const THREAD_NAME: &str = "devgated-events";
const ERROR_BACKOFF: Duration = Duration::from_millis(150);

/// Handle to the running event listener.
///
/// Dropping the handle detaches the thread; it runs until the process exits.
#[derive(Debug)]
pub(crate) struct EventListener {
    topic: String,
    handle: JoinHandle<()>,
}

impl EventListener {
    /// Spawns the listener thread for an open subscription.
    pub(crate) fn start(stream: Box<dyn EventStream>, topic: &str) -> Result<Self, EventError> {
        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_owned())
            .spawn(move || drain(stream))
            .map_err(|source| EventError::Thread { source })?;
        Ok(Self {
            topic: topic.to_owned(),
            handle,
        })
    }

    pub(crate) fn topic(&self) -> &str {
        &self.topic
    }

    /// Whether the stream has ended.
    pub(crate) fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

fn drain(mut stream: Box<dyn EventStream>) {
    let mut last_error = None::<String>;
    loop {
        match stream.next_event() {
            Ok(Some(message)) => {
                last_error = None;
                log_message(&message);
            }
            Ok(None) => {
                debug!(target: EVENTS_TARGET, "event stream ended");
                return;
            }
            Err(error) => {
                let text = error.to_string();
                if last_error.as_deref() != Some(text.as_str()) {
                    warn!(target: EVENTS_TARGET, %error, "event consume error");
                }
                last_error = Some(text);
                thread::sleep(ERROR_BACKOFF);
            }
        }
    }
}

fn log_message(message: &EventMessage) {
    info!(
        target: EVENTS_TARGET,
        topic = %message.topic,
        partition = message.partition,
        offset = message.offset,
        payload = %String::from_utf8_lossy(&message.payload),
        "received event"
    );
}

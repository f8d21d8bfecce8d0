//! Test helpers for the transport module.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use super::{ConnectionHandler, ConnectionStream, SessionControl};

pub(crate) struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    pub(crate) fn new() -> (Arc<AtomicUsize>, Arc<Self>) {
        let count = Arc::new(AtomicUsize::new(0));
        let handler = Arc::new(Self {
            count: Arc::clone(&count),
        });
        (count, handler)
    }
}

impl ConnectionHandler for CountingHandler {
    fn handle(&self, _stream: ConnectionStream) -> SessionControl {
        self.count.fetch_add(1, Ordering::SeqCst);
        SessionControl::Continue
    }
}

/// Counts connections and asks the listener to stop on the `stop_at`-th one.
pub(crate) struct StopOnNth {
    count: Arc<AtomicUsize>,
    stop_at: usize,
}

impl StopOnNth {
    pub(crate) fn new(stop_at: usize) -> (Arc<AtomicUsize>, Arc<Self>) {
        let count = Arc::new(AtomicUsize::new(0));
        let handler = Arc::new(Self {
            count: Arc::clone(&count),
            stop_at,
        });
        (count, handler)
    }
}

impl ConnectionHandler for StopOnNth {
    fn handle(&self, _stream: ConnectionStream) -> SessionControl {
        let seen = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        if seen >= self.stop_at {
            SessionControl::Stop
        } else {
            SessionControl::Continue
        }
    }
}

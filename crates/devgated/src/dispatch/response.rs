//! Response assembly for the line protocol.
//!
//! A response is a list of fragments joined by single spaces and terminated
//! by `"\n;"` so clients can detect its end without a length prefix.

use std::io::Write;

use super::errors::DispatchError;

/// Terminator appended to every response.
pub(crate) const RESPONSE_TERMINATOR: &str = "\n;";

/// Accumulated fragments for one response.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ResponseLine {
    fragments: Vec<String>,
}

impl ResponseLine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Builds a response holding a single fragment.
    pub(crate) fn text(text: impl Into<String>) -> Self {
        let mut line = Self::new();
        line.push(text);
        line
    }

    /// Appends a fragment. Empty fragments are dropped.
    pub(crate) fn push(&mut self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        if !fragment.is_empty() {
            self.fragments.push(fragment);
        }
    }

    /// Appends a success fragment or the error's display text.
    pub(crate) fn push_outcome(&mut self, outcome: &Result<String, DispatchError>) {
        match outcome {
            Ok(text) => self.push(text.as_str()),
            Err(error) => self.push(error.to_string()),
        }
    }

    /// The response body without its terminator.
    pub(crate) fn body(&self) -> String {
        self.fragments.join(" ")
    }

    /// The bytes written to the client.
    pub(crate) fn render(&self) -> String {
        format!("{}{RESPONSE_TERMINATOR}", self.body())
    }
}

/// Sorts a string collection and joins it with single spaces.
pub(crate) fn sorted_join(mut items: Vec<String>) -> String {
    items.sort();
    items.join(" ")
}

/// Writer that frames responses onto a stream.
pub(crate) struct ResponseWriter<W> {
    writer: W,
}

impl<W: Write> ResponseWriter<W> {
    /// Creates a new response writer wrapping the given output stream.
    pub(crate) fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes a terminated response and flushes the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or flushing fails.
    pub(crate) fn write_response(&mut self, response: &ResponseLine) -> Result<(), DispatchError> {
        self.writer.write_all(response.render().as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Writes an error as the whole response.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub(crate) fn write_error(&mut self, error: &DispatchError) -> Result<(), DispatchError> {
        self.write_response(&ResponseLine::text(error.to_string()))
    }
}

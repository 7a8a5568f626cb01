//! Error types and handling for pullstream
//!
//! This module provides the error taxonomy for stream and pipeline
//! operations: expected end-of-data, OS-level I/O failures, invalid
//! seek targets, exhausted fixed-size sinks, and codec decode errors.

use thiserror::Error;

/// Main error type for pullstream operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StreamError {
    /// A finite readable source has no more bytes to supply.
    ///
    /// This is the expected, non-exceptional termination signal: the
    /// iterator and generator layers translate it into the end of a
    /// sequence rather than surfacing it to the caller.
    #[error("end of stream")]
    EndOfStream,
    /// I/O related errors from the underlying OS resource
    #[error("IO error: {0}")]
    Io(String),
    /// Seek target outside the valid range of the stream
    #[error("invalid seek to position {position}")]
    InvalidSeek { position: i64 },
    /// A fixed-size sink could not accept more bytes
    #[error("resource exhausted")]
    ResourceExhausted,
    /// A byte sequence that cannot be decoded under the codec's rules
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl StreamError {
    /// Whether this error is the expected end-of-data condition rather
    /// than a genuine failure.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, StreamError::EndOfStream)
    }
}

impl From<std::io::Error> for StreamError {
    fn from(err: std::io::Error) -> Self {
        StreamError::Io(err.to_string())
    }
}

/// Result type for pullstream operations
pub type StreamResult<T> = Result<T, StreamError>;

//! Error types for twiml

use thiserror::Error;

/// Rendering error.
///
/// Building a response cannot fail; the only failure source is the output
/// sink reporting a write error during [`Response::to_xml`](crate::Response::to_xml).
#[derive(Debug, Error)]
pub enum Error {
    /// The output sink reported a write failure.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for twiml
pub type Result<T> = std::result::Result<T, Error>;

//! Error types shared across the SMS application crates.

use thiserror::Error;

/// Errors a handler can raise while processing a dispatched message.
///
/// These are *infrastructure* failures and propagate out of the pipeline to
/// the host process. A handler that merely wants to tell the sender they did
/// something wrong should return [`crate::Outcome::CallerError`] instead.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The handler could not complete its work.
    #[error("handler failed: {0}")]
    Failed(String),

    /// A captured argument was missing or malformed even though the pattern
    /// matched (usually a vocabulary/pattern mismatch).
    #[error("bad capture: {0}")]
    BadCapture(String),
}

/// Errors that can occur when talking to the carrier gateway.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection to the gateway failed.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Message sending failed.
    #[error("send failed: {0}")]
    SendFailed(String),

    /// Flushing buffered messages failed.
    #[error("flush failed: {0}")]
    FlushFailed(String),
}

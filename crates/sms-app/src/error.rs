//! Error types for the inbound pipeline.

use sms_core::HandlerError;
use thiserror::Error;

/// Errors that escape the inbound pipeline.
///
/// Only genuine handler failures land here; caller mistakes are replies
/// ([`sms_core::Outcome::CallerError`]) and transport failures are contained
/// by the gateway. Recovery is the host's responsibility.
#[derive(Debug, Error)]
pub enum AppError {
    /// A handler failed while processing a dispatched message.
    #[error("handler '{handler}' failed: {source}")]
    Handler {
        handler: String,
        source: HandlerError,
    },
}

//! Handler outcome signals.

/// The control signal a handler returns to the pipeline.
///
/// `Respond` and `CallerError` both make the pipeline send the text back to
/// the caller; they are distinguished only so logs and metrics can tell a
/// successful reply from a caller mistake. Anything a handler cannot express
/// as one of these is an error and belongs in `Result::Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Handled; nothing to send back.
    Complete,

    /// Handled successfully, with an immediate reply to the caller.
    Respond(String),

    /// The caller supplied invalid input; the text is echoed back as the
    /// reply.
    CallerError(String),
}

impl Outcome {
    /// The reply text to send back, if any.
    pub fn reply_text(&self) -> Option<&str> {
        match self {
            Outcome::Complete => None,
            Outcome::Respond(text) | Outcome::CallerError(text) => Some(text),
        }
    }

    /// Whether this outcome reports a caller fault.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Outcome::CallerError(_))
    }
}

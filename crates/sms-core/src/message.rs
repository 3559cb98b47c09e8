//! Inbound message type.

use serde::{Deserialize, Serialize};

/// A message received from the transport, or a chunk split out of one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// The sender's normalized address.
    pub caller: String,

    /// The message text (for a chunk, only its own slice of the original).
    pub text: String,

    /// True when this message is a chunk of a larger inbound text rather
    /// than something the transport delivered on its own.
    pub is_virtual: bool,
}

impl InboundMessage {
    /// Create a top-level inbound message.
    pub fn new(caller: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            caller: caller.into(),
            text: text.into(),
            is_virtual: false,
        }
    }

    /// Derive a virtual chunk of this message carrying only `text`.
    pub fn chunk_of(&self, text: impl Into<String>) -> Self {
        Self {
            caller: self.caller.clone(),
            text: text.into(),
            is_virtual: true,
        }
    }
}

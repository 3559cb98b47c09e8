//! Per-call processing context.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ephemeral identifier scoped to one top-level inbound message.
///
/// The id is an 8-digit integer so it is easy to pick out of logs and to read
/// back over the phone. Chunks split out of a larger message share the id of
/// their parent; two top-level messages get independent ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(u32);

impl TransactionId {
    /// Smallest assignable id.
    pub const MIN: u32 = 11_111_111;

    /// Largest assignable id.
    pub const MAX: u32 = 99_999_999;

    /// Wrap a raw id value.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The context threaded through one dispatch call.
///
/// Created at pipeline entry and dropped when the top-level message finishes
/// processing, so a transaction id can never leak into another call. This is
/// deliberately per-call state rather than a field on the application: a
/// transport that delivers messages from multiple threads cannot make one
/// call's transaction visible to another.
#[derive(Debug, Clone)]
pub struct HandlerContext {
    /// The sender's normalized address.
    pub caller: String,

    /// The transaction id of the enclosing top-level message.
    pub transaction: TransactionId,

    /// True when this dispatch is for a chunk split out of a larger message.
    pub is_virtual: bool,
}

impl HandlerContext {
    /// Create a context for a top-level inbound message.
    pub fn new(caller: impl Into<String>, transaction: TransactionId) -> Self {
        Self {
            caller: caller.into(),
            transaction,
            is_virtual: false,
        }
    }

    /// Derive the context for a chunk of this message.
    ///
    /// Chunks keep the caller and transaction and are marked virtual.
    pub fn chunk(&self) -> Self {
        Self {
            caller: self.caller.clone(),
            transaction: self.transaction,
            is_virtual: true,
        }
    }
}

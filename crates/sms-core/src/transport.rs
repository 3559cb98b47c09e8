//! The outbound transport seam.

use async_trait::async_trait;

use crate::error::TransportError;

/// Trait for delivering outgoing messages to a carrier gateway.
///
/// Abstracted to support different backends (HTTP gateways, modems, tests).
/// The inbound direction is not part of this trait: a transport adapter calls
/// back into the pipeline with `(caller, text)` for every received message.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver one message.
    ///
    /// # Arguments
    /// * `destination` - Address in external form (leading `+`)
    /// * `body` - Message content
    /// * `buffered` - Hold the message for a later [`flush`](Self::flush)
    ///   instead of transmitting immediately, for backends that batch
    async fn send(
        &self,
        destination: &str,
        body: &str,
        buffered: bool,
    ) -> Result<(), TransportError>;

    /// Transmit any buffered messages.
    ///
    /// Default implementation does nothing, for backends that send
    /// immediately.
    async fn flush(&self) -> Result<(), TransportError> {
        Ok(())
    }
}

//! The outgoing gateway.

use std::sync::Arc;

use sms_core::{Transport, TransportError};
use tracing::{info, warn};

use crate::hooks::Hooks;
use crate::normalize::NumberNormalizer;

/// Sends replies through the transport, best-effort.
///
/// A transport failure is logged and contained here; neither the handler nor
/// the sender ever observes it.
pub struct OutgoingGateway {
    transport: Arc<dyn Transport>,
    normalizer: Arc<dyn NumberNormalizer>,
    hooks: Arc<Hooks>,
}

impl OutgoingGateway {
    /// Create a gateway over the given transport.
    pub fn new(
        transport: Arc<dyn Transport>,
        normalizer: Arc<dyn NumberNormalizer>,
        hooks: Arc<Hooks>,
    ) -> Self {
        Self {
            transport,
            normalizer,
            hooks,
        }
    }

    /// Send one message to `destination`.
    ///
    /// Trailing whitespace is trimmed from the body. The destination is
    /// converted to external form only for the transport call itself, so the
    /// log and the hooks see the address as supplied by calling code.
    pub async fn send(&self, destination: &str, body: &str, buffered: bool) {
        let body = body.trim_end();

        if let Some(hook) = &self.hooks.before_outgoing {
            hook(destination, body);
        }

        info!(
            destination,
            len = body.len(),
            buffered,
            "outgoing message: {:?}",
            body
        );

        let external = self.normalizer.to_external(destination);
        if let Err(e) = self.transport.send(&external, body, buffered).await {
            warn!(destination = %external, error = %e, "outgoing send failed");
        }

        if let Some(hook) = &self.hooks.after_outgoing {
            hook(destination, body);
        }
    }

    /// Send a multi-line message, joining `lines` with newlines.
    pub async fn send_lines(&self, destination: &str, lines: &[String], buffered: bool) {
        self.send(destination, &lines.join("\n"), buffered).await;
    }

    /// Flush the transport's buffered messages, if it batches.
    pub async fn flush(&self) -> Result<(), TransportError> {
        self.transport.flush().await
    }
}

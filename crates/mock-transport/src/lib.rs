//! Mock transport implementations for testing SMS message processing.
//!
//! - [`RecordingTransport`] - Records every send for later inspection,
//!   including buffered sends released by `flush`
//! - [`FailingTransport`] - Every send fails, for failure-containment tests
//! - [`ConsoleTransport`] - Logs outbound messages, for demos

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use sms_core::{Transport, TransportError};

/// One message captured by a [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// Destination address as handed to the transport (external form).
    pub destination: String,

    /// Message body.
    pub body: String,

    /// Whether the send was buffered.
    pub buffered: bool,
}

#[derive(Default)]
struct Recorded {
    sent: Vec<SentMessage>,
    pending: Vec<SentMessage>,
}

/// A transport that records every message instead of delivering it.
///
/// Buffered sends are held in a pending queue until [`flush`](Transport::flush)
/// moves them into the sent list, mimicking a batching gateway.
#[derive(Default)]
pub struct RecordingTransport {
    recorded: Mutex<Recorded>,
}

impl RecordingTransport {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All delivered messages, in delivery order.
    pub async fn sent(&self) -> Vec<SentMessage> {
        self.recorded.lock().await.sent.clone()
    }

    /// Bodies of all delivered messages, in delivery order.
    pub async fn sent_bodies(&self) -> Vec<String> {
        self.recorded
            .lock()
            .await
            .sent
            .iter()
            .map(|m| m.body.clone())
            .collect()
    }

    /// Number of buffered messages awaiting a flush.
    pub async fn pending_count(&self) -> usize {
        self.recorded.lock().await.pending.len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(
        &self,
        destination: &str,
        body: &str,
        buffered: bool,
    ) -> Result<(), TransportError> {
        let message = SentMessage {
            destination: destination.to_string(),
            body: body.to_string(),
            buffered,
        };
        let mut recorded = self.recorded.lock().await;
        if buffered {
            recorded.pending.push(message);
        } else {
            recorded.sent.push(message);
        }
        Ok(())
    }

    async fn flush(&self) -> Result<(), TransportError> {
        let mut recorded = self.recorded.lock().await;
        let pending = std::mem::take(&mut recorded.pending);
        recorded.sent.extend(pending);
        Ok(())
    }
}

/// A transport whose every send fails.
#[derive(Debug, Clone, Default)]
pub struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn send(
        &self,
        destination: &str,
        _body: &str,
        _buffered: bool,
    ) -> Result<(), TransportError> {
        Err(TransportError::SendFailed(format!(
            "refusing delivery to {}",
            destination
        )))
    }

    async fn flush(&self) -> Result<(), TransportError> {
        Err(TransportError::FlushFailed("transport is down".to_string()))
    }
}

/// A transport that logs outbound messages instead of delivering them.
#[derive(Debug, Clone, Default)]
pub struct ConsoleTransport;

#[async_trait]
impl Transport for ConsoleTransport {
    async fn send(
        &self,
        destination: &str,
        body: &str,
        buffered: bool,
    ) -> Result<(), TransportError> {
        info!(destination, buffered, "console transport: {:?}", body);
        Ok(())
    }
}

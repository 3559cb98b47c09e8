//! Core traits and types for SMS keyword applications.
//!
//! This crate provides the shared interface between the routing engine, the
//! inbound pipeline, and transport implementations. It defines:
//!
//! - [`Handler`] - The trait that all message handlers must implement
//! - [`Outcome`] - The control signal a handler returns to the pipeline
//! - [`InboundMessage`] / [`HandlerContext`] - Per-message types
//! - [`Transport`] - The outbound seam to the carrier gateway
//! - [`HandlerError`] / [`TransportError`] - Error types
//!
//! # Example
//!
//! ```rust
//! use sms_core::{async_trait, Handler, HandlerContext, HandlerError, Outcome};
//!
//! struct HelpHandler;
//!
//! #[async_trait]
//! impl Handler for HelpHandler {
//!     async fn handle(
//!         &self,
//!         _ctx: &HandlerContext,
//!         _args: Vec<String>,
//!     ) -> Result<Outcome, HandlerError> {
//!         Ok(Outcome::Respond("Here is some help".to_string()))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "help"
//!     }
//! }
//! ```

mod context;
mod error;
mod handler;
mod message;
mod outcome;
mod transport;

pub use context::{HandlerContext, TransactionId};
pub use error::{HandlerError, TransportError};
pub use handler::{FnHandler, Handler};
pub use message::InboundMessage;
pub use outcome::Outcome;
pub use transport::Transport;

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

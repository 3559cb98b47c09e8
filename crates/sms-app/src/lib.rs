//! Inbound processing pipeline and outgoing gateway for SMS keyword
//! applications.
//!
//! An [`SmsApplication`] ties the pieces together: a transport adapter calls
//! [`SmsApplication::incoming`] with `(caller, text)` for every received
//! message, the pipeline normalizes the caller, assigns a transaction,
//! splits multi-command texts into chunks, dispatches each through the
//! keyword router, and turns handler outcomes into replies sent through the
//! [`OutgoingGateway`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use keyword_router::KeywordRouter;
//! use sms_app::SmsApplication;
//! use sms_core::{FnHandler, Outcome};
//!
//! # async fn example(transport: Arc<dyn sms_core::Transport>) -> Result<(), Box<dyn std::error::Error>> {
//! let router = KeywordRouter::builder()
//!     .scope(["HELP"])
//!     .blank(FnHandler::new("help", |_ctx, _args| {
//!         Ok(Outcome::Respond("Here is some help".to_string()))
//!     }))
//!     .finish()
//!     .build()?;
//!
//! let app = SmsApplication::builder(transport).router(router).build();
//! app.incoming("+15551234567", "HELP").await?;
//! # Ok(())
//! # }
//! ```

mod app;
mod error;
mod gateway;
mod hooks;
mod normalize;
mod split;

pub use app::{SmsApplication, SmsApplicationBuilder};
pub use error::AppError;
pub use gateway::OutgoingGateway;
pub use hooks::{Hooks, IncomingHook, OutgoingHook};
pub use normalize::{E164Normalizer, NumberNormalizer};
pub use split::split_chunks;

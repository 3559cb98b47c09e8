//! The Handler trait definition.

use async_trait::async_trait;

use crate::context::HandlerContext;
use crate::error::HandlerError;
use crate::outcome::Outcome;

/// A trait for processing a dispatched inbound message.
///
/// `args` holds the pattern's capture groups in left-to-right order; for the
/// fallback handler it holds the whole message text as a single argument.
/// This trait is object-safe and can be used with `Arc<dyn Handler>`.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Process a dispatched message and return an outcome.
    async fn handle(
        &self,
        ctx: &HandlerContext,
        args: Vec<String>,
    ) -> Result<Outcome, HandlerError>;

    /// Get a human-readable name for this handler (used in logs).
    fn name(&self) -> &str;
}

/// Adapter wrapping a plain closure as a [`Handler`].
///
/// # Example
///
/// ```rust
/// use sms_core::{FnHandler, Outcome};
///
/// let handler = FnHandler::new("echo", |_ctx, args| {
///     Ok(Outcome::Respond(args.join(" ")))
/// });
/// ```
pub struct FnHandler<F> {
    name: String,
    func: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&HandlerContext, Vec<String>) -> Result<Outcome, HandlerError> + Send + Sync,
{
    /// Wrap `func` as a handler named `name`.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

#[async_trait]
impl<F> Handler for FnHandler<F>
where
    F: Fn(&HandlerContext, Vec<String>) -> Result<Outcome, HandlerError> + Send + Sync,
{
    async fn handle(
        &self,
        ctx: &HandlerContext,
        args: Vec<String>,
    ) -> Result<Outcome, HandlerError> {
        (self.func)(ctx, args)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

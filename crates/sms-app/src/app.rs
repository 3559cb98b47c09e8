//! The inbound processing pipeline.

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use sms_core::{
    Handler, HandlerContext, HandlerError, InboundMessage, Outcome, TransactionId, Transport,
    TransportError,
};
use tracing::{debug, info, warn};

use keyword_router::KeywordRouter;

use crate::error::AppError;
use crate::gateway::OutgoingGateway;
use crate::hooks::Hooks;
use crate::normalize::{E164Normalizer, NumberNormalizer};
use crate::split::split_chunks;

/// The default fallback: log the message and ignore it.
struct IgnoreHandler;

#[async_trait]
impl Handler for IgnoreHandler {
    async fn handle(
        &self,
        ctx: &HandlerContext,
        _args: Vec<String>,
    ) -> Result<Outcome, HandlerError> {
        warn!(caller = %ctx.caller, "incoming message ignored");
        Ok(Outcome::Complete)
    }

    fn name(&self) -> &str {
        "ignore"
    }
}

/// An SMS keyword application: one inbound pipeline plus its outgoing
/// gateway.
///
/// One call to [`incoming`](Self::incoming) runs synchronously to
/// completion: normalize the caller, assign a transaction, split the text
/// into command chunks, dispatch each through the router (or the fallback
/// handler), and send any replies. All per-message state lives in the
/// [`HandlerContext`] created for the call, so concurrent transports cannot
/// interfere with each other's transactions.
pub struct SmsApplication {
    router: Option<KeywordRouter>,
    fallback: Arc<dyn Handler>,
    normalizer: Arc<dyn NumberNormalizer>,
    hooks: Arc<Hooks>,
    gateway: OutgoingGateway,
}

impl SmsApplication {
    /// Start building an application over the given transport.
    pub fn builder(transport: Arc<dyn Transport>) -> SmsApplicationBuilder {
        SmsApplicationBuilder {
            transport,
            router: None,
            fallback: None,
            normalizer: None,
            hooks: Hooks::new(),
        }
    }

    /// Process one inbound message end to end.
    ///
    /// The transport adapter calls this with `(caller, text)` for every
    /// received message. `Respond` and `CallerError` outcomes become replies
    /// to the caller; a handler failure propagates to the host and skips the
    /// rest of the call.
    pub async fn incoming(&self, caller: &str, text: &str) -> Result<(), AppError> {
        let message = InboundMessage::new(self.normalizer.to_internal(caller), text);
        let ctx = HandlerContext::new(message.caller.clone(), new_transaction());

        info!(
            caller = %message.caller,
            transaction = %ctx.transaction,
            len = message.text.len(),
            "incoming message: {:?}",
            message.text
        );

        if let Some(hook) = &self.hooks.before_incoming {
            hook(&ctx, &message.caller, &message.text);
        }

        let chunks = split_chunks(&message.text);
        if chunks.len() > 1 {
            // each chunk is an independent virtual sub-message sharing the
            // caller and transaction; the top-level text itself is not
            // dispatched
            let chunk_ctx = ctx.chunk();
            for chunk in chunks {
                let chunk_message = message.chunk_of(chunk);
                debug!(
                    transaction = %ctx.transaction,
                    "dispatching chunk: {:?}",
                    chunk_message.text
                );
                self.dispatch_unit(&chunk_ctx, &chunk_message).await?;
            }
        } else {
            self.dispatch_unit(&ctx, &message).await?;
        }

        if let Some(hook) = &self.hooks.after_incoming {
            hook(&ctx, &message.caller, &message.text);
        }

        // ctx drops here; the transaction id is unreachable from now on
        Ok(())
    }

    /// Dispatch one message unit (the whole text or a single chunk).
    async fn dispatch_unit(
        &self,
        ctx: &HandlerContext,
        message: &InboundMessage,
    ) -> Result<(), AppError> {
        let outcome = match &self.router {
            Some(router) => match router.dispatch(&message.text) {
                Some(matched) => {
                    let name = matched.handler.name().to_string();
                    debug!(
                        pattern = matched.pattern,
                        handler = %name,
                        virtual_chunk = ctx.is_virtual,
                        "dispatching to handler"
                    );
                    matched
                        .handler
                        .handle(ctx, matched.args)
                        .await
                        .map_err(|source| AppError::Handler {
                            handler: name,
                            source,
                        })?
                }
                None => self.run_fallback(ctx, &message.text).await?,
            },
            None => self.run_fallback(ctx, &message.text).await?,
        };

        if let Some(reply) = outcome.reply_text() {
            if outcome.is_caller_error() {
                warn!(caller = %ctx.caller, "caller error: {:?}", reply);
            }
            self.gateway.send(&ctx.caller, reply, false).await;
        }
        Ok(())
    }

    async fn run_fallback(&self, ctx: &HandlerContext, text: &str) -> Result<Outcome, AppError> {
        self.fallback
            .handle(ctx, vec![text.to_string()])
            .await
            .map_err(|source| AppError::Handler {
                handler: self.fallback.name().to_string(),
                source,
            })
    }

    /// The application's outgoing gateway, for handlers or host code that
    /// send outside the reply path.
    pub fn gateway(&self) -> &OutgoingGateway {
        &self.gateway
    }

    /// Flush the transport's buffered messages.
    pub async fn flush(&self) -> Result<(), TransportError> {
        self.gateway.flush().await
    }
}

/// Builder for [`SmsApplication`].
pub struct SmsApplicationBuilder {
    transport: Arc<dyn Transport>,
    router: Option<KeywordRouter>,
    fallback: Option<Arc<dyn Handler>>,
    normalizer: Option<Arc<dyn NumberNormalizer>>,
    hooks: Hooks,
}

impl SmsApplicationBuilder {
    /// Use this router for dispatch. Without one, every message goes to the
    /// fallback handler.
    pub fn router(mut self, router: KeywordRouter) -> Self {
        self.router = Some(router);
        self
    }

    /// Use this handler for messages no pattern matches.
    ///
    /// The default fallback logs the message and ignores it.
    pub fn fallback(mut self, handler: impl Handler + 'static) -> Self {
        self.fallback = Some(Arc::new(handler));
        self
    }

    /// Override number normalization.
    pub fn normalizer(mut self, normalizer: impl NumberNormalizer + 'static) -> Self {
        self.normalizer = Some(Arc::new(normalizer));
        self
    }

    /// Install lifecycle hooks.
    pub fn hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Build the application.
    pub fn build(self) -> SmsApplication {
        let normalizer = self
            .normalizer
            .unwrap_or_else(|| Arc::new(E164Normalizer));
        let hooks = Arc::new(self.hooks);
        let gateway = OutgoingGateway::new(
            Arc::clone(&self.transport),
            Arc::clone(&normalizer),
            Arc::clone(&hooks),
        );

        SmsApplication {
            router: self.router,
            fallback: self.fallback.unwrap_or_else(|| Arc::new(IgnoreHandler)),
            normalizer,
            hooks,
            gateway,
        }
    }
}

/// A fresh transaction id for one top-level inbound message.
///
/// 8 digits, so it is easy to distinguish in logs.
fn new_transaction() -> TransactionId {
    TransactionId::from_raw(rand::thread_rng().gen_range(TransactionId::MIN..=TransactionId::MAX))
}

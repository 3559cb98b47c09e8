//! Optional lifecycle hooks.

use sms_core::HandlerContext;

/// Hook called around inbound processing with `(context, caller, raw text)`.
pub type IncomingHook = Box<dyn Fn(&HandlerContext, &str, &str) + Send + Sync>;

/// Hook called around an outgoing send with `(destination, body)`.
pub type OutgoingHook = Box<dyn Fn(&str, &str) + Send + Sync>;

/// The application's lifecycle hooks.
///
/// Each hook is an optional field decided at construction; an absent hook is
/// a no-op. Ordering is fixed: before-incoming → dispatch/handle →
/// after-incoming, and before-outgoing → send attempt → after-outgoing.
#[derive(Default)]
pub struct Hooks {
    /// Runs after caller normalization and transaction assignment, before
    /// splitting and dispatch.
    pub before_incoming: Option<IncomingHook>,

    /// Runs after every chunk of the message has been handled.
    pub after_incoming: Option<IncomingHook>,

    /// Runs before an outgoing send is logged and attempted.
    pub before_outgoing: Option<OutgoingHook>,

    /// Runs after the send attempt, whether or not it succeeded.
    pub after_outgoing: Option<OutgoingHook>,
}

impl Hooks {
    /// No hooks at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the before-incoming hook.
    pub fn on_before_incoming(
        mut self,
        hook: impl Fn(&HandlerContext, &str, &str) + Send + Sync + 'static,
    ) -> Self {
        self.before_incoming = Some(Box::new(hook));
        self
    }

    /// Set the after-incoming hook.
    pub fn on_after_incoming(
        mut self,
        hook: impl Fn(&HandlerContext, &str, &str) + Send + Sync + 'static,
    ) -> Self {
        self.after_incoming = Some(Box::new(hook));
        self
    }

    /// Set the before-outgoing hook.
    pub fn on_before_outgoing(
        mut self,
        hook: impl Fn(&str, &str) + Send + Sync + 'static,
    ) -> Self {
        self.before_outgoing = Some(Box::new(hook));
        self
    }

    /// Set the after-outgoing hook.
    pub fn on_after_outgoing(
        mut self,
        hook: impl Fn(&str, &str) + Send + Sync + 'static,
    ) -> Self {
        self.after_outgoing = Some(Box::new(hook));
        self
    }
}

//! Route registration and ordered dispatch.

use std::sync::Arc;

use sms_core::Handler;
use tracing::{debug, info};

use crate::error::RouterError;
use crate::pattern::{CompiledPattern, PatternCompiler};
use crate::vocabulary::TokenVocabulary;

/// How a pending route should be compiled and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteKind {
    /// An ordinary `(prefix, suffix)` pattern.
    Pattern,
    /// An empty suffix matching the prefix alone.
    Blank,
    /// The scope's catch-all, matching the prefix with any (or no) tail.
    CatchAll,
}

struct PendingRoute {
    prefix: String,
    suffix: String,
    kind: RouteKind,
    handler: Arc<dyn Handler>,
}

struct Registration {
    pattern: CompiledPattern,
    handler: Arc<dyn Handler>,
}

/// The result of a successful dispatch.
pub struct RouteMatch<'a> {
    /// The handler registered for the matched pattern.
    pub handler: &'a Arc<dyn Handler>,

    /// Capture groups, left to right, as strings.
    pub args: Vec<String>,

    /// The matched pattern's source string, for logging.
    pub pattern: &'a str,
}

/// Builder for a [`KeywordRouter`].
///
/// Routes are registered in declaration order and that order is semantically
/// significant: the first match wins at dispatch time, which is also how
/// specific-before-catch-all precedence is expressed.
pub struct RouterBuilder {
    vocabulary: TokenVocabulary,
    pending: Vec<PendingRoute>,
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterBuilder {
    /// Start a builder over the stock vocabulary.
    pub fn new() -> Self {
        Self::with_vocabulary(TokenVocabulary::default())
    }

    /// Start a builder over a custom vocabulary.
    pub fn with_vocabulary(vocabulary: TokenVocabulary) -> Self {
        Self {
            vocabulary,
            pending: Vec::new(),
        }
    }

    /// Register an unscoped pattern.
    pub fn route(self, pattern: &str, handler: impl Handler + 'static) -> Self {
        self.route_arc(pattern, Arc::new(handler))
    }

    /// Register an unscoped pattern with a shared handler.
    pub fn route_arc(mut self, pattern: &str, handler: Arc<dyn Handler>) -> Self {
        self.pending.push(PendingRoute {
            prefix: String::new(),
            suffix: pattern.to_string(),
            kind: RouteKind::Pattern,
            handler,
        });
        self
    }

    /// Open a prefix scope.
    ///
    /// Every route registered on the returned [`ScopeBuilder`] is combined
    /// with each of `prefixes` (one registration per prefix × suffix).
    pub fn scope<I, S>(self, prefixes: I) -> ScopeBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScopeBuilder {
            parent: self,
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Compile every registered pattern and produce the router.
    ///
    /// Fails fast on the first invalid pattern, and rejects any scope where
    /// a route was registered after the catch-all for the same prefix (the
    /// catch-all would shadow it).
    pub fn build(self) -> Result<KeywordRouter, RouterError> {
        let compiler = PatternCompiler::new(self.vocabulary);
        let mut routes = Vec::with_capacity(self.pending.len());
        let mut caught_prefixes: Vec<String> = Vec::new();

        for pending in self.pending {
            if pending.kind != RouteKind::CatchAll
                && caught_prefixes.contains(&pending.prefix)
            {
                return Err(RouterError::RouteAfterCatchAll {
                    prefix: pending.prefix,
                    pattern: pending.suffix,
                });
            }

            let pattern = match pending.kind {
                RouteKind::CatchAll => {
                    caught_prefixes.push(pending.prefix.clone());
                    compiler.compile_catch_all(&pending.prefix)?
                }
                RouteKind::Pattern | RouteKind::Blank => {
                    compiler.compile(&pending.prefix, &pending.suffix)?
                }
            };

            debug!(
                pattern = pattern.source(),
                handler = pending.handler.name(),
                "registered route"
            );
            routes.push(Registration {
                pattern,
                handler: pending.handler,
            });
        }

        info!(routes = routes.len(), "keyword router built");
        Ok(KeywordRouter { routes })
    }
}

/// A [`RouterBuilder`] with a prefix (or several) applied to every route.
pub struct ScopeBuilder {
    parent: RouterBuilder,
    prefixes: Vec<String>,
}

impl ScopeBuilder {
    /// Register a suffix pattern under every prefix of this scope.
    pub fn route(self, suffix: &str, handler: impl Handler + 'static) -> Self {
        self.push(suffix, RouteKind::Pattern, Arc::new(handler))
    }

    /// Register the prefix alone (help/default for the scope).
    pub fn blank(self, handler: impl Handler + 'static) -> Self {
        self.push("", RouteKind::Blank, Arc::new(handler))
    }

    /// Register the scope's catch-all.
    ///
    /// Matches anything under the prefix not claimed by an earlier route,
    /// including the bare prefix itself; typically paired with a handler
    /// returning a usage message. Must come after the scope's specific
    /// routes, which `build` enforces.
    pub fn catch_all(self, handler: impl Handler + 'static) -> Self {
        self.push("(whatever)", RouteKind::CatchAll, Arc::new(handler))
    }

    /// Close the scope and return to the parent builder.
    pub fn finish(self) -> RouterBuilder {
        self.parent
    }

    fn push(mut self, suffix: &str, kind: RouteKind, handler: Arc<dyn Handler>) -> Self {
        for prefix in &self.prefixes {
            self.parent.pending.push(PendingRoute {
                prefix: prefix.clone(),
                suffix: suffix.to_string(),
                kind,
                handler: Arc::clone(&handler),
            });
        }
        self
    }
}

/// Resolves inbound text to the first registered handler whose pattern
/// matches.
///
/// Dispatch never reorders, sorts by specificity, or attempts longest-match;
/// ties are resolved purely by registration order.
pub struct KeywordRouter {
    routes: Vec<Registration>,
}

impl std::fmt::Debug for KeywordRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordRouter")
            .field("routes", &self.routes.len())
            .finish()
    }
}

impl KeywordRouter {
    /// Start building a router.
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Find the first route whose pattern fully matches `text`.
    ///
    /// `None` means no route matched; the pipeline falls back to its default
    /// handler. It is a distinguishable outcome, not an error.
    pub fn dispatch(&self, text: &str) -> Option<RouteMatch<'_>> {
        for registration in &self.routes {
            if let Some(args) = registration.pattern.captures(text) {
                debug!(
                    pattern = registration.pattern.source(),
                    handler = registration.handler.name(),
                    "dispatch matched"
                );
                return Some(RouteMatch {
                    handler: &registration.handler,
                    args,
                    pattern: registration.pattern.source(),
                });
            }
        }
        debug!(text_len = text.len(), "dispatch found no match");
        None
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

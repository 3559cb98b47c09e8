//! Error types for the routing engine.

use thiserror::Error;

/// Configuration errors raised while building a router.
///
/// All of these surface at construction time, never at first dispatch: an
/// application with a broken pattern must fail on startup.
#[derive(Debug, Error)]
pub enum RouterError {
    /// A pattern did not compile after token expansion.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A vocabulary token name was defined twice.
    #[error("duplicate token {0:?}")]
    DuplicateToken(String),

    /// A token fragment is not a valid capturing regex group.
    #[error("invalid fragment for token {name:?}: {reason}")]
    InvalidFragment { name: String, reason: String },

    /// A token fragment contains another token's placeholder syntax, which
    /// would make expansion order observable.
    #[error("fragment for token {name:?} contains placeholder ({other})")]
    NestedPlaceholder { name: String, other: String },

    /// A route was registered after the catch-all for the same prefix and
    /// would be shadowed by it.
    #[error("route {pattern:?} registered after catch-all for prefix {prefix:?}")]
    RouteAfterCatchAll { prefix: String, pattern: String },
}

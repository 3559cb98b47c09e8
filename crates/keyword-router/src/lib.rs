//! Pattern-based keyword routing for inbound SMS messages.
//!
//! This crate turns human-readable pattern strings like `"REPEAT (numbers)
//! (.+)"` into compiled matchers and resolves inbound text to the first
//! registered handler whose pattern matches. It provides:
//!
//! - [`TokenVocabulary`] - Named placeholder → regex-fragment table
//! - [`PatternCompiler`] / [`CompiledPattern`] - Pattern compilation
//! - [`RouterBuilder`] / [`ScopeBuilder`] - Declarative route registration
//! - [`KeywordRouter`] - Ordered first-match-wins dispatch
//!
//! # Example
//!
//! ```rust
//! use keyword_router::KeywordRouter;
//! use sms_core::{FnHandler, Outcome};
//!
//! # fn main() -> Result<(), keyword_router::RouterError> {
//! let router = KeywordRouter::builder()
//!     .scope(["HELP"])
//!     .blank(FnHandler::new("help", |_ctx, _args| {
//!         Ok(Outcome::Respond("Here is some help".to_string()))
//!     }))
//!     .finish()
//!     .build()?;
//!
//! let matched = router.dispatch("help").expect("should match");
//! assert_eq!(matched.handler.name(), "help");
//! # Ok(())
//! # }
//! ```

mod error;
mod pattern;
mod registry;
mod vocabulary;

pub use error::RouterError;
pub use pattern::{CompiledPattern, PatternCompiler};
pub use registry::{KeywordRouter, RouteMatch, RouterBuilder, ScopeBuilder};
pub use vocabulary::TokenVocabulary;

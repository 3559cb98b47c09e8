//! Pattern compilation.

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::error::RouterError;
use crate::vocabulary::TokenVocabulary;

/// A compiled, anchored, case-insensitive matcher plus its source string.
///
/// Immutable once compiled. The source string is kept for diagnostics only.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    source: String,
}

impl CompiledPattern {
    /// The pattern string this matcher was compiled from (before token
    /// expansion).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Match `text` in full and return the capture groups, left to right.
    ///
    /// Returns `None` unless the whole text matches. A group that
    /// participated in no match (an optional tail) captures as an empty
    /// string.
    pub fn captures(&self, text: &str) -> Option<Vec<String>> {
        self.regex.captures(text).map(|caps| {
            caps.iter()
                .skip(1)
                .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
                .collect()
        })
    }
}

/// Compiles human-readable pattern strings into [`CompiledPattern`]s.
///
/// Compilation is deterministic and side-effect-free; an invalid pattern is
/// a configuration error surfaced to the caller, never deferred.
#[derive(Debug, Clone, Default)]
pub struct PatternCompiler {
    vocabulary: TokenVocabulary,
}

impl PatternCompiler {
    /// Create a compiler over the given vocabulary.
    pub fn new(vocabulary: TokenVocabulary) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary used for token expansion.
    pub fn vocabulary(&self) -> &TokenVocabulary {
        &self.vocabulary
    }

    /// Compile a `(prefix, suffix)` pair.
    ///
    /// Non-empty parts are joined with a single space. Every literal space
    /// then stands for one-or-more whitespace, tokens are expanded, and the
    /// result is anchored at both ends and compiled case-insensitively.
    pub fn compile(&self, prefix: &str, suffix: &str) -> Result<CompiledPattern, RouterError> {
        let source = join_parts(prefix, suffix);
        self.compile_source(&source, &self.expand(&source))
    }

    /// Compile the catch-all pattern for a prefix scope.
    ///
    /// Matches the prefix alone or the prefix followed by anything, so a
    /// bare keyword with a missing suffix still lands on the scope's
    /// invalid-input handler. The tail is a single capture group (empty for
    /// the bare keyword).
    pub fn compile_catch_all(&self, prefix: &str) -> Result<CompiledPattern, RouterError> {
        let source = join_parts(prefix, "(whatever)");
        let expanded = format!(r"{}(?:\s+(.+))?", self.expand(prefix));
        self.compile_source(&source, &expanded)
    }

    fn expand(&self, source: &str) -> String {
        self.vocabulary.expand(&self.expand_spaces(source))
    }

    fn expand_spaces(&self, source: &str) -> String {
        source.replace(' ', r"\s+")
    }

    fn compile_source(
        &self,
        source: &str,
        expanded: &str,
    ) -> Result<CompiledPattern, RouterError> {
        let anchored = format!("^{}$", expanded);
        let regex = RegexBuilder::new(&anchored)
            .case_insensitive(true)
            .build()
            .map_err(|e| RouterError::InvalidPattern {
                pattern: source.to_string(),
                reason: e.to_string(),
            })?;

        debug!(pattern = %source, regex = %anchored, "compiled pattern");
        Ok(CompiledPattern {
            regex,
            source: source.to_string(),
        })
    }
}

fn join_parts(prefix: &str, suffix: &str) -> String {
    match (prefix.is_empty(), suffix.is_empty()) {
        (true, _) => suffix.to_string(),
        (_, true) => prefix.to_string(),
        (false, false) => format!("{} {}", prefix, suffix),
    }
}

//! Named placeholder tokens for pattern authors.

use regex::Regex;

use crate::error::RouterError;

/// Table mapping placeholder names to regex fragments.
///
/// Pattern authors write `(numbers)` and get the capturing fragment `(\d+)`
/// substituted in. Expansion is verbatim string replacement: the placeholder
/// `(name)` is a literal token to find, not a regex.
#[derive(Debug, Clone)]
pub struct TokenVocabulary {
    entries: Vec<(String, String)>,
}

impl Default for TokenVocabulary {
    /// The stock vocabulary: `slug`, `letters`, `numbers`, `whatever`.
    fn default() -> Self {
        let mut vocabulary = Self::empty();
        for (name, fragment) in [
            ("slug", r"([a-z0-9\-]+)"),
            ("letters", "([a-z]+)"),
            ("numbers", r"(\d+)"),
            ("whatever", "(.+)"),
        ] {
            vocabulary
                .add_token(name, fragment)
                .expect("stock vocabulary fragment");
        }
        vocabulary
    }
}

impl TokenVocabulary {
    /// Create a vocabulary with no tokens.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Define a token.
    ///
    /// Fails if the name is already defined, if the fragment is not a valid
    /// capturing regex group, or if the fragment contains another token's
    /// placeholder syntax (expansion order must never be observable).
    pub fn add_token(
        &mut self,
        name: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Result<(), RouterError> {
        let name = name.into();
        let fragment = fragment.into();

        if self.entries.iter().any(|(existing, _)| *existing == name) {
            return Err(RouterError::DuplicateToken(name));
        }

        let compiled = Regex::new(&fragment).map_err(|e| RouterError::InvalidFragment {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        // captures_len counts the implicit whole-match group
        if compiled.captures_len() < 2 {
            return Err(RouterError::InvalidFragment {
                name,
                reason: "fragment has no capture group".to_string(),
            });
        }

        for (existing, existing_fragment) in &self.entries {
            if fragment.contains(&placeholder(existing)) {
                return Err(RouterError::NestedPlaceholder {
                    name,
                    other: existing.clone(),
                });
            }
            if existing_fragment.contains(&placeholder(&name)) {
                return Err(RouterError::NestedPlaceholder {
                    name: existing.clone(),
                    other: name,
                });
            }
        }

        self.entries.push((name, fragment));
        Ok(())
    }

    /// Replace every placeholder occurrence in `source` with its fragment.
    pub fn expand(&self, source: &str) -> String {
        let mut expanded = source.to_string();
        for (name, fragment) in &self.entries {
            expanded = expanded.replace(&placeholder(name), fragment);
        }
        expanded
    }

    /// Iterate over `(name, fragment)` pairs in definition order.
    pub fn tokens(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, fragment)| (name.as_str(), fragment.as_str()))
    }
}

fn placeholder(name: &str) -> String {
    format!("({})", name)
}

//! Multi-command message splitting.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separators between commands packed into one message: `;`, `,` or `#`
/// (each optionally surrounded by whitespace), or any run of 3+ whitespace.
static SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[;,#]\s*|\s{3,}").expect("separator regex"));

/// Split an inbound text into independent command chunks.
///
/// A text with no separator comes back as a single chunk equal to the
/// original. Empty chunks (a trailing `;`, two separators in a row) are
/// discarded.
pub fn split_chunks(text: &str) -> Vec<&str> {
    SEPARATOR
        .split(text)
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_semicolon() {
        assert_eq!(split_chunks("HELP; REPEAT 3 hi"), vec!["HELP", "REPEAT 3 hi"]);
    }

    #[test]
    fn test_split_on_comma_and_hash() {
        assert_eq!(split_chunks("a , b"), vec!["a", "b"]);
        assert_eq!(split_chunks("a#b"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_on_long_whitespace_run() {
        assert_eq!(split_chunks("HELP   REPEAT 3 hi"), vec!["HELP", "REPEAT 3 hi"]);
    }

    #[test]
    fn test_no_separator_is_noop() {
        assert_eq!(split_chunks("REPEAT 3 hi"), vec!["REPEAT 3 hi"]);
        // two spaces are an ordinary word gap, not a separator
        assert_eq!(split_chunks("REPEAT  3"), vec!["REPEAT  3"]);
    }

    #[test]
    fn test_empty_chunks_discarded() {
        assert_eq!(split_chunks("HELP;"), vec!["HELP"]);
        assert_eq!(split_chunks("a;;b"), vec!["a", "b"]);
    }
}

//! Number normalization at the pipeline boundary.

/// Converts addresses between internal and external (gateway) form.
///
/// Inbound numbers are assumed to arrive already in international form, so
/// the default implementation only manages the leading `+`. Override either
/// method for providers with their own numbering quirks. Implementations
/// must be pure.
pub trait NumberNormalizer: Send + Sync {
    /// Strip the leading international-prefix marker for internal use.
    fn to_internal(&self, number: &str) -> String {
        number.strip_prefix('+').unwrap_or(number).to_string()
    }

    /// Ensure the leading `+` expected by carrier gateways.
    fn to_external(&self, number: &str) -> String {
        if number.starts_with('+') {
            number.to_string()
        } else {
            format!("+{}", number)
        }
    }
}

/// The default normalizer; uses the trait's provided behavior unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct E164Normalizer;

impl NumberNormalizer for E164Normalizer {}

use thiserror::Error;

/// The reason a decode was rejected.
///
/// Decoding fails closed at the first grammar violation: an unexpected
/// character, premature end of input, a malformed escape or number, an
/// unmatched literal, or nesting beyond the configured depth. No partial
/// value is produced and no position is attached.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The text is not a single well-formed JSON value.
    #[error("invalid input")]
    InvalidInput,
}

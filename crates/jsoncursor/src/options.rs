/// Configuration for [`decode_with_options`](crate::decode_with_options).
///
/// # Examples
///
/// ```rust
/// use jsoncursor::{DecodeOptions, decode_with_options};
///
/// let options = DecodeOptions { max_depth: 2 };
/// assert!(decode_with_options("[[1]]", options).is_ok());
/// assert!(decode_with_options("[[[1]]]", options).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// The deepest nesting of objects and arrays the decoder accepts.
    ///
    /// The decoder recurses once per level, so this bounds its stack usage.
    /// Input nested deeper is rejected like any other invalid input.
    ///
    /// # Default
    ///
    /// `512`
    pub max_depth: usize,
}

impl DecodeOptions {
    /// The nesting limit used by [`DecodeOptions::default`].
    pub const DEFAULT_MAX_DEPTH: usize = 512;
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration for [`encode_with_options`](crate::encode_with_options).
///
/// # Default
///
/// Compact output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Whether to indent nested members with one tab per level and place
    /// them on their own lines.
    ///
    /// Empty objects and arrays stay `{}` and `[]` either way.
    ///
    /// # Default
    ///
    /// `false`
    pub pretty: bool,
}

impl EncodeOptions {
    /// No inserted whitespace.
    #[must_use]
    pub const fn compact() -> Self {
        Self { pretty: false }
    }

    /// Tab-indented, one member per line.
    #[must_use]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl From<bool> for EncodeOptions {
    fn from(pretty: bool) -> Self {
        Self { pretty }
    }
}

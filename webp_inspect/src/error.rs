/// An error that stopped a WebP file from being parsed.
///
/// Only running out of input is fatal. Everything else we can work around is
/// reported as a [`webp_inspect_types::Diagnostic`] on the document instead.
#[derive(Clone, Debug, PartialEq, PartialOrd, Hash)]
pub enum WebpParseError {
    /// A field reached past the end of the input.
    TruncatedInput {
        /// The field we were trying to read.
        field: &'static str,

        /// Where the field starts.
        offset: usize,

        /// How many bytes the field needs.
        needed: usize,

        /// How long the input actually was.
        available: usize,
    },
}

impl core::error::Error for WebpParseError {}

impl core::fmt::Display for WebpParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WebpParseError::TruncatedInput {
                field,
                offset,
                needed,
                available,
            } => write!(
                f,
                "Input ended early while reading {field}. Needed `{needed}` bytes \
                at offset `{offset}`, but the input is only `{available}` bytes long."
            ),
        }
    }
}

use std::path::PathBuf;

use crate::{
    anim::AnimationMeta,
    container::{ChunkHeader, ContainerHeader, Variant},
    extended::{Canvas, ExtendedFeatures},
    fourcc::FourCc,
};

/// Everything we learned about a WebP file's structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebpDocument {
    /// Where the bytes came from, if the caller told us.
    ///
    /// Never used while parsing.
    pub source_path: Option<PathBuf>,

    /// The RIFF file header.
    pub container_header: ContainerHeader,

    /// The first chunk's header, which says what kind of WebP this is.
    pub variant_header: ChunkHeader,

    /// Feature flags. Only present for extended (`VP8X`) files.
    pub extended_features: Option<ExtendedFeatures>,

    /// The canvas size. Only present for extended (`VP8X`) files.
    pub canvas: Option<Canvas>,

    /// Animation info. Only present when the animation flag is set.
    pub animation: Option<AnimationMeta>,

    /// Anything odd we noticed that didn't stop the parse.
    pub diagnostics: Vec<Diagnostic>,
}

impl WebpDocument {
    /// Attaches a source path to this document.
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// The image variant, from the first chunk's tag.
    pub fn variant(&self) -> Variant {
        self.variant_header.variant()
    }

    /// Whether the parse found nothing unusual.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A problem found in the file that we were able to parse past.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum Diagnostic {
    /// The file didn't start with `RIFF`.
    UnexpectedRiffTag(FourCc),

    /// The form type wasn't `WEBP`.
    UnexpectedFormatTag(FourCc),

    /// The first chunk wasn't `VP8 `, `VP8L`, or `VP8X`.
    UnknownVariant(FourCc),

    /// The frame scan hit a chunk that wasn't `ANMF`.
    AnimationChainBroken {
        /// Where that chunk starts.
        offset: u32,

        /// Its tag.
        found: FourCc,
    },

    /// The header's file size doesn't match the input's length.
    FileSizeMismatch {
        /// The length a file with this header should have.
        expected_len: u64,

        /// The length of the input we were given.
        actual_len: u64,
    },
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Diagnostic::UnexpectedRiffTag(tag) => {
                write!(f, "Expected a `RIFF` tag at offset 0, but found `{tag}`.")
            }
            Diagnostic::UnexpectedFormatTag(tag) => {
                write!(f, "Expected a `WEBP` tag at offset 8, but found `{tag}`.")
            }
            Diagnostic::UnknownVariant(tag) => write!(
                f,
                "The first chunk should be `VP8 `, `VP8L`, or `VP8X`, but was `{tag}`."
            ),
            Diagnostic::AnimationChainBroken { offset, found } => write!(
                f,
                "Animation frame scan stopped at offset `{offset}`: found `{found}` \
                instead of `ANMF`."
            ),
            Diagnostic::FileSizeMismatch {
                expected_len,
                actual_len,
            } => write!(
                f,
                "File header implies a length of `{expected_len}` bytes, \
                but the input is `{actual_len}` bytes long."
            ),
        }
    }
}

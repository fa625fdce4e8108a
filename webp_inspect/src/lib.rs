//! # `webp_inspect`
//!
//! A library to inspect the structure of WebP files.
//!
//! It walks the RIFF container and reports what it finds: the file header,
//! which kind of WebP the file is, the extended feature flags, the canvas
//! size, and, for animations, every frame's position, size, and timing.
//!
//! No image data is decoded. Reading the file is up to you, too -- this
//! crate only ever looks at a byte slice.
//!
//! ## Usage
//!
//! ```
//! # let mut bytes: Vec<u8> = b"RIFF\0\0\0\0WEBPVP8X\x0a\0\0\0".to_vec();
//! # bytes.extend([0b0000_1000, 0, 0, 0, 0x3f, 0x01, 0, 0xef, 0, 0]);
//! # let size = (bytes.len() - 8) as u32;
//! # bytes[4..8].copy_from_slice(&size.to_le_bytes());
//! use webp_inspect::{Variant, WebpDocument};
//!
//! // pretend you loaded a file somehow
//! // ...
//!
//! // then, check that it's a WebP and parse it!
//! assert!(webp_inspect::magic_number(&bytes));
//! let doc: WebpDocument = webp_inspect::parse(&bytes).unwrap();
//!
//! assert_eq!(doc.variant(), Variant::Extended);
//!
//! let canvas = doc.canvas.unwrap();
//! assert_eq!((canvas.width, canvas.height), (320, 240));
//! assert!(doc.extended_features.unwrap().exif());
//! assert!(doc.animation.is_none());
//! ```
//!
//! ## Errors
//!
//! The only fatal error is running out of bytes. Other oddities (wrong tags,
//! a file size that doesn't match, animation frames followed by something
//! unexpected) are collected in [`WebpDocument::diagnostics`] and logged
//! through the [`log`] crate.
//!
//! ## License
//!
//! This project is dual-licensed under either the Apache License 2.0 or the MIT License at your option.

#![forbid(unsafe_code)]

pub mod anim;
pub mod chunk;
pub mod document;
pub mod error;
pub mod extended;
pub mod header;
pub mod reader;
pub mod report;

pub use error::WebpParseError;
pub use webp_inspect_types::{
    AnimationFrame, AnimationMeta, BackgroundColor, BlendMethod, Canvas, ChunkHeader,
    ContainerHeader, Diagnostic, DisposeMethod, ExtendedFeatures, FourCc, ScanEnd, Variant,
    WebpDocument,
};

/// Parses a WebP file's structure.
///
/// # Errors
///
/// Returns [`WebpParseError::TruncatedInput`] if any field we need lies past
/// the end of `input`. No partial document is returned in that case.
pub fn parse(input: &impl AsRef<[u8]>) -> Result<WebpDocument, WebpParseError> {
    let input: &[u8] = input.as_ref();
    log::trace!("Parsing a WebP file of `{}` bytes.", input.len());

    document::document(input)
        .inspect_err(|e| log::error!("Failed to parse WebP file! err: {e}"))
}

/// Checks whether `input` starts like a WebP file.
///
/// This only looks at the `RIFF` and `WEBP` tags. It does NOT parse the whole
/// file!
pub fn magic_number(input: &[u8]) -> bool {
    // there must be twelve bytes in the input
    let Some(slice) = input.get(0..12) else {
        return false;
    };

    // then, those bytes must be `RIFF`, a size, and `WEBP`
    slice[0..4] == *b"RIFF" && slice[8..12] == *b"WEBP"
}

/// Internal utility methods.
pub(crate) mod util {
    /// Helper function to initialize the logger for testing.
    #[cfg(test)]
    pub fn logger() {
        _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::max())
            .format_file(true)
            .format_line_number(true)
            .try_init();
    }
}

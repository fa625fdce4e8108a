//! The `VP8X` chunk: feature flags and canvas size.
//!
//! This is arranged in a manner explained in the WebP docs. See:
//! <https://developers.google.com/speed/webp/docs/riff_container>
//!
//! ```text
//! offset 20: |Rsv|I|L|E|X|A|R|   (flags)
//! offset 21: reserved (3 bytes)
//! offset 24: canvas width minus one (3 bytes)
//! offset 27: canvas height minus one (3 bytes)
//! ```

use webp_inspect_types::{Canvas, ExtendedFeatures};

use crate::{error::WebpParseError, reader::ByteReader};

pub const FLAGS_OFFSET: usize = 20;
pub const CANVAS_WIDTH_OFFSET: usize = 24;
pub const CANVAS_HEIGHT_OFFSET: usize = 27;

/// Grabs the feature flags byte.
///
/// Call this only once you know the first chunk is `VP8X`.
pub fn extended_features(reader: &ByteReader<'_>) -> Result<ExtendedFeatures, WebpParseError> {
    log::trace!("Parsing: extended feature flags.");

    let flags: u8 = reader.u8("extended feature flags", FLAGS_OFFSET)?;
    let features = ExtendedFeatures::new(flags);

    log::debug!(
        "Extended features: `{flags:08b}` \
        (icc: {}, alpha: {}, exif: {}, xmp: {}, animation: {})",
        features.icc(),
        features.alpha(),
        features.exif(),
        features.xmp(),
        features.animation(),
    );

    Ok(features)
}

/// Grabs the canvas size.
///
/// Both dimensions are stored minus one, so we add it back.
pub fn canvas(reader: &ByteReader<'_>) -> Result<Canvas, WebpParseError> {
    log::trace!("Parsing: canvas dimensions.");

    let width_minus_one: u32 = reader.le_u24("canvas width", CANVAS_WIDTH_OFFSET)?;
    let height_minus_one: u32 = reader.le_u24("canvas height", CANVAS_HEIGHT_OFFSET)?;

    Ok(Canvas::from_minus_one(width_minus_one, height_minus_one))
}

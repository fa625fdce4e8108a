use webp_inspect_types::{
    AnimationMeta, Canvas, ChunkHeader, ContainerHeader, Diagnostic, ExtendedFeatures, Variant,
    WebpDocument,
};

use crate::{anim, chunk::chunk_header, error::WebpParseError, extended, header, reader::ByteReader};

/// Where the first chunk (the one naming the variant) starts.
pub const VARIANT_OFFSET: usize = 12;

/// Walks the whole file.
///
/// See [`crate::parse`].
pub(crate) fn document(input: &[u8]) -> Result<WebpDocument, WebpParseError> {
    let reader = ByteReader::new(input);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    // first, look for the header.
    //
    // its file size has to be known before we walk any chunks
    let container_header: ContainerHeader = header::container_header(&reader, &mut diagnostics)?;
    check_file_size(&container_header, reader.len(), &mut diagnostics);

    // all WebPs should have at least one chunk, and it tells us what kind of
    // file this is
    let variant_header: ChunkHeader = chunk_header(&reader, VARIANT_OFFSET)?;

    let mut s = WebpDocument {
        source_path: None,
        container_header,
        variant_header,
        extended_features: None,
        canvas: None,
        animation: None,
        diagnostics: Vec::new(),
    };

    match variant_header.variant() {
        Variant::Lossy | Variant::Lossless => {
            log::debug!("Simple format (`{}`): no extended header.", variant_header.tag);
        }

        // if it's an "extended" WebP, then there's a feature flags byte and
        // a canvas size
        Variant::Extended => {
            let features: ExtendedFeatures = extended::extended_features(&reader)?;
            let canvas: Canvas = extended::canvas(&reader)?;

            // animated files have their `ANIM` chunk next
            let animation: Option<AnimationMeta> = if features.animation() {
                Some(anim::animation(
                    &reader,
                    container_header.declared_file_size,
                    &mut diagnostics,
                )?)
            } else {
                None
            };

            s.extended_features = Some(features);
            s.canvas = Some(canvas);
            s.animation = animation;
        }

        Variant::Unknown(tag) => {
            log::warn!(
                "Unknown first chunk `{tag}`. Expected `VP8 `, `VP8L`, or `VP8X`. \
                Not parsing any further."
            );
            diagnostics.push(Diagnostic::UnknownVariant(tag));
        }
    }

    s.diagnostics = diagnostics;
    Ok(s)
}

/// A well-formed file is exactly as long as its header says.
///
/// A mismatch doesn't stop anything, but it's worth knowing about.
fn check_file_size(header: &ContainerHeader, actual_len: usize, diagnostics: &mut Vec<Diagnostic>) {
    // the normalized size doesn't count the size field itself
    let expected_len: u64 = u64::from(header.declared_file_size) + 4;
    let actual_len: u64 = actual_len as u64;

    if expected_len != actual_len {
        log::warn!(
            "Header says the file is `{expected_len}` bytes long, but got `{actual_len}` bytes."
        );
        diagnostics.push(Diagnostic::FileSizeMismatch {
            expected_len,
            actual_len,
        });
    }
}

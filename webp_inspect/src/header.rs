use webp_inspect_types::{ContainerHeader, Diagnostic, FourCc};

use crate::{error::WebpParseError, reader::ByteReader};

/// Parses out the WebP file header block.
///
/// This should be the first thing in the file:
///
/// - `RIFF` (ASCII)
/// - the file size, as a little-endian `u32`
/// - `WEBP` (ASCII)
///
/// The stored file size starts counting at the `WEBP` tag. We add 4 to it
/// here, before any chunks are walked, since the animation frame scan uses
/// the result as its stopping point.
///
/// Wrong tags don't stop the parse. They're pushed onto `diagnostics`.
pub fn container_header(
    reader: &ByteReader<'_>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<ContainerHeader, WebpParseError> {
    log::trace!("Parsing: container header.");

    let riff_tag: FourCc = reader.fourcc("RIFF tag", 0)?;
    let stored_file_size: u32 = reader.le_u32("file size", 4)?;
    let format_tag: FourCc = reader.fourcc("WEBP tag", 8)?;

    if riff_tag != FourCc::RIFF {
        log::warn!("File doesn't start with `RIFF`! Found `{riff_tag}` instead.");
        diagnostics.push(Diagnostic::UnexpectedRiffTag(riff_tag));
    }

    if format_tag != FourCc::WEBP {
        log::warn!("RIFF form type isn't `WEBP`! Found `{format_tag}` instead.");
        diagnostics.push(Diagnostic::UnexpectedFormatTag(format_tag));
    }

    let declared_file_size: u32 = stored_file_size.checked_add(4).unwrap_or_else(|| {
        log::warn!(
            "File size was reported as `{stored_file_size}` bytes, which can't be \
            normalized. Clamping to `{}`.",
            u32::MAX
        );
        u32::MAX
    });

    Ok(ContainerHeader {
        riff_tag,
        declared_file_size,
        format_tag,
    })
}

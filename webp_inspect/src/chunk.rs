use webp_inspect_types::ChunkHeader;

use crate::{error::WebpParseError, reader::ByteReader};

/// Parses out the header of a RIFF chunk starting at `offset`.
///
/// The format in WebP is simple:
///
/// - let fourcc = input.read(4)
/// - let len = input.read_u32()
///
/// The payload (and any padding byte) follows, but we don't touch it here.
/// We also don't check the fourcc -- it's up to the caller to decide which
/// chunks it expects.
pub fn chunk_header(
    reader: &ByteReader<'_>,
    offset: usize,
) -> Result<ChunkHeader, WebpParseError> {
    log::trace!("Parsing: chunk header at offset `{offset}`.");

    let tag = reader.fourcc("chunk tag", offset)?;
    let payload_size = reader.le_u32("chunk size", offset + 4)?;

    Ok(ChunkHeader { tag, payload_size })
}

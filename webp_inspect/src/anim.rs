//! Parses the `ANIM` chunk and walks the chain of `ANMF` frames behind it.
//!
//! The `ANIM` chunk sits at a fixed offset right after the `VP8X` chunk:
//!
//! ```text
//! offset 30: ChunkHeader('ANIM')
//! offset 38: background color, [Blue, Green, Red, Alpha]
//! offset 42: loop count (u16)
//! ```
//!
//! Frames follow at offset 44. Each frame's header says how large it is, and
//! that's the only way to find the next one.

use webp_inspect_types::{
    AnimationFrame, AnimationMeta, BackgroundColor, ChunkHeader, Diagnostic, FourCc, ScanEnd,
};

use crate::{
    chunk::chunk_header,
    error::WebpParseError,
    reader::{ByteReader, is_bit_set},
};

pub const ANIM_OFFSET: usize = 30;
pub const FIRST_FRAME_OFFSET: u32 = 44;

/// Parses the `ANIM` chunk, then every `ANMF` frame we can find.
///
/// The frame scan stops when:
///
/// - the next frame would start at or beyond `declared_file_size`, or
/// - the bytes at the next frame's offset aren't `ANMF`.
///
/// The second case isn't an error, but it is pushed onto `diagnostics`.
///
/// Call this only once the `VP8X` animation flag has been found.
pub fn animation(
    reader: &ByteReader<'_>,
    declared_file_size: u32,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<AnimationMeta, WebpParseError> {
    log::trace!("Parsing: animation chunk.");

    let header: ChunkHeader = chunk_header(reader, ANIM_OFFSET)?;
    if header.tag != FourCc::ANIM {
        log::warn!(
            "Expected an `ANIM` chunk at offset `{ANIM_OFFSET}`, but found `{}`. \
            Parsing it as one anyway.",
            header.tag
        );
    }

    let color: &[u8] = reader.bytes("background color", ANIM_OFFSET + 8, 4)?;
    let background_color = BackgroundColor::from_bgra([color[0], color[1], color[2], color[3]]);
    let loop_count: u16 = reader.le_u16("loop count", ANIM_OFFSET + 12)?;

    let mut frames: Vec<AnimationFrame> = Vec::new();
    let mut offset: u32 = FIRST_FRAME_OFFSET;

    // each frame moves `offset` forward by at least a chunk header, so this
    // always ends
    let (last_parsed_offset, scan_end) = loop {
        let frame: AnimationFrame = frame(reader, offset)?;
        let next: u32 = offset
            .saturating_add(ChunkHeader::LEN)
            .saturating_add(frame.header.payload_size);

        log::trace!(
            "Found frame #{} at offset `{offset}`. Next frame at `{next}`.",
            frames.len() + 1
        );
        frames.push(frame);

        if next >= declared_file_size {
            break (next, ScanEnd::ReachedFileSize);
        }

        let tag: FourCc = reader.fourcc("next frame tag", next as usize)?;
        if tag != FourCc::ANMF {
            log::warn!(
                "Animation frame scan stopped at offset `{next}`: expected `ANMF`, \
                but found `{tag}`."
            );
            diagnostics.push(Diagnostic::AnimationChainBroken {
                offset: next,
                found: tag,
            });
            break (
                next,
                ScanEnd::UnexpectedTag {
                    offset: next,
                    found: tag,
                },
            );
        }

        offset = next;
    };

    log::debug!(
        "Found `{}` animation frame(s). Scan ended at `{last_parsed_offset}`.",
        frames.len()
    );

    Ok(AnimationMeta {
        header,
        background_color,
        loop_count,
        frames,
        last_parsed_offset,
        scan_end,
    })
}

/// Parses one `ANMF` chunk starting at `offset`.
///
/// ```text
/// +0:  ChunkHeader('ANMF')
/// +8:  frame X (u24), in units of two pixels
/// +11: frame Y (u24), in units of two pixels
/// +14: frame width minus one (u24)
/// +17: frame height minus one (u24)
/// +20: frame duration (u24), in milliseconds
/// +23: reserved (6 bits), blending method (1 bit), disposal method (1 bit)
/// +24: frame data
/// ```
fn frame(reader: &ByteReader<'_>, offset: u32) -> Result<AnimationFrame, WebpParseError> {
    let at = offset as usize;

    let header: ChunkHeader = chunk_header(reader, at)?;
    let frame_x: u32 = reader.le_u24("frame x", at + 8)?;
    let frame_y: u32 = reader.le_u24("frame y", at + 11)?;
    let frame_width: u32 = reader.le_u24("frame width", at + 14)? + 1;
    let frame_height: u32 = reader.le_u24("frame height", at + 17)? + 1;
    let frame_duration: u32 = reader.le_u24("frame duration", at + 20)?;
    let reserved: u8 = reader.u8("frame flags", at + 23)?;

    // frame data is whatever's left of the payload after the fixed fields
    let payload_end: u32 = offset
        .saturating_add(ChunkHeader::LEN)
        .saturating_add(header.payload_size);
    let payload_start: u32 = offset
        .saturating_add(ChunkHeader::LEN + AnimationFrame::FIELDS_LEN)
        .min(payload_end);

    Ok(AnimationFrame {
        offset,
        header,
        frame_x,
        frame_y,
        frame_width,
        frame_height,
        frame_duration,
        reserved,
        blending_method: is_bit_set(reserved, 1),
        disposal_method: is_bit_set(reserved, 0),
        payload: payload_start..payload_end,
    })
}

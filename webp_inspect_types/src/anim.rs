//! Types for animated WebP files: the `ANIM` chunk and its `ANMF` frames.

use core::ops::Range;

use crate::{container::ChunkHeader, fourcc::FourCc};

/// Global animation parameters, plus every frame we found after them.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct AnimationMeta {
    /// The `ANIM` chunk header.
    pub header: ChunkHeader,

    /// Suggested canvas color between loops.
    pub background_color: BackgroundColor,

    /// How many times to play the animation. `0` means forever.
    pub loop_count: u16,

    /// All frames, in file order (which is also display order).
    pub frames: Vec<AnimationFrame>,

    /// The offset right after the last frame we parsed.
    ///
    /// This is only a scan marker. It isn't part of the format.
    pub last_parsed_offset: u32,

    /// Why the frame scan stopped.
    pub scan_end: ScanEnd,
}

impl AnimationMeta {
    /// Whether the animation loops forever.
    pub const fn loops_forever(&self) -> bool {
        self.loop_count == 0
    }
}

/// The background color from the `ANIM` chunk.
///
/// The file stores this in `[Blue, Green, Red, Alpha]` order.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct BackgroundColor {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub alpha: u8,
}

impl BackgroundColor {
    /// Builds the color from its four bytes, in file order.
    pub const fn from_bgra(bytes: [u8; 4]) -> Self {
        let [blue, green, red, alpha] = bytes;
        Self {
            blue,
            green,
            red,
            alpha,
        }
    }

    /// The four bytes in file order.
    pub const fn to_bgra(&self) -> [u8; 4] {
        [self.blue, self.green, self.red, self.alpha]
    }
}

/// Why the `ANMF` scan stopped.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum ScanEnd {
    /// The next frame would start at or past the declared file size.
    ///
    /// This is the normal way for an animation to end.
    ReachedFileSize,

    /// Something other than `ANMF` followed a frame.
    ///
    /// This happens when other chunks (like `EXIF`) come after the frames,
    /// but it can also mean the file is corrupt.
    UnexpectedTag {
        /// Where the tag was found.
        offset: u32,

        /// The tag itself.
        found: FourCc,
    },
}

/// One `ANMF` chunk.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct AnimationFrame {
    /// Offset of this chunk's header from the start of the file.
    pub offset: u32,

    /// The `ANMF` chunk header.
    pub header: ChunkHeader,

    /// X coordinate of the frame's upper left corner, divided by two.
    pub frame_x: u32,

    /// Y coordinate of the frame's upper left corner, divided by two.
    pub frame_y: u32,

    /// Frame width in pixels.
    pub frame_width: u32,

    /// Frame height in pixels.
    pub frame_height: u32,

    /// How long to show this frame, in milliseconds.
    pub frame_duration: u32,

    /// The byte holding the blending and disposal bits.
    ///
    /// Laid out as in the WebP container format: six reserved bits, then
    /// blending (bit 1), then disposal (bit 0).
    pub reserved: u8,

    /// Bit 1 of `reserved`. When set, the frame overwrites the canvas.
    pub blending_method: bool,

    /// Bit 0 of `reserved`. When set, the frame's area is cleared to the
    /// background color after it's shown.
    pub disposal_method: bool,

    /// Where the frame's data (its `ALPH`/`VP8 `/`VP8L` chunks) lives in
    /// the input.
    ///
    /// This is computed from the chunk header and may reach past the end of
    /// a truncated file.
    pub payload: Range<u32>,
}

impl AnimationFrame {
    /// The size of the fixed fields at the start of an `ANMF` payload.
    pub const FIELDS_LEN: u32 = 16;

    /// Horizontal offset of the frame on the canvas, in pixels.
    pub const fn x_offset(&self) -> u32 {
        self.frame_x * 2
    }

    /// Vertical offset of the frame on the canvas, in pixels.
    pub const fn y_offset(&self) -> u32 {
        self.frame_y * 2
    }

    pub const fn blend(&self) -> BlendMethod {
        if self.blending_method {
            BlendMethod::Overwrite
        } else {
            BlendMethod::AlphaBlend
        }
    }

    pub const fn dispose(&self) -> DisposeMethod {
        if self.disposal_method {
            DisposeMethod::Background
        } else {
            DisposeMethod::None
        }
    }

    /// Grabs this frame's data from the file it was parsed from.
    ///
    /// If the file is shorter than the chunk claims, you'll get whatever is
    /// there.
    pub fn payload_bytes<'input>(&self, input: &'input [u8]) -> &'input [u8] {
        let end = (self.payload.end as usize).min(input.len());
        let start = (self.payload.start as usize).min(end);
        &input[start..end]
    }
}

/// How a frame is combined with the canvas.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum BlendMethod {
    /// Alpha-blend the frame onto the canvas.
    AlphaBlend,

    /// Replace the canvas area with the frame.
    Overwrite,
}

/// What happens to a frame's area once the frame has been shown.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum DisposeMethod {
    /// Leave it as is.
    None,

    /// Fill it with the background color.
    Background,
}

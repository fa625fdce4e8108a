//! The RIFF file header and the generic chunk header.

use crate::fourcc::FourCc;

/// The 12-byte header at the very start of every WebP file.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct ContainerHeader {
    /// Should be `RIFF`.
    pub riff_tag: FourCc,

    /// The file size from the header, normalized by adding 4.
    ///
    /// The stored value counts the `WEBP` tag plus every chunk after it.
    /// The animation frame scan stops once it reaches this offset.
    ///
    /// Note that a well-formed file is `declared_file_size + 4` bytes long,
    /// since the size field itself isn't counted anywhere.
    pub declared_file_size: u32,

    /// Should be `WEBP`.
    pub format_tag: FourCc,
}

impl ContainerHeader {
    /// Whether both tags hold their expected values.
    pub fn is_webp(&self) -> bool {
        self.riff_tag == FourCc::RIFF && self.format_tag == FourCc::WEBP
    }
}

/// The header in front of every RIFF chunk.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct ChunkHeader {
    /// What kind of chunk this is.
    pub tag: FourCc,

    /// How many bytes of payload follow the header.
    ///
    /// The 8 bytes of the header itself are not included.
    pub payload_size: u32,
}

impl ChunkHeader {
    /// The length of a chunk header in bytes.
    pub const LEN: u32 = 8;

    /// Interprets this header's tag as the image's VP8 variant.
    ///
    /// Only meaningful for the first chunk after the file header.
    pub fn variant(&self) -> Variant {
        Variant::from(self.tag)
    }
}

/// Which kind of WebP image the file holds, judging by its first chunk.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum Variant {
    /// `VP8 `: a single lossy image.
    Lossy,

    /// `VP8L`: a single lossless image.
    Lossless,

    /// `VP8X`: the extended format, with feature flags, a canvas, and maybe
    /// animation.
    Extended,

    /// Anything else.
    Unknown(
        /// The tag we found instead.
        FourCc,
    ),
}

impl From<FourCc> for Variant {
    fn from(tag: FourCc) -> Self {
        match tag {
            FourCc::VP8 => Variant::Lossy,
            FourCc::VP8L => Variant::Lossless,
            FourCc::VP8X => Variant::Extended,
            other => Variant::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ChunkHeader, FourCc, Variant};

    #[test]
    fn variant_tags_are_exact() {
        let header = |tag: &[u8; 4]| ChunkHeader {
            tag: FourCc::new(*tag),
            payload_size: 0,
        };

        assert_eq!(header(b"VP8 ").variant(), Variant::Lossy);
        assert_eq!(header(b"VP8L").variant(), Variant::Lossless);
        assert_eq!(header(b"VP8X").variant(), Variant::Extended);

        // no trailing-space leniency
        assert_eq!(
            header(b"VP8\0").variant(),
            Variant::Unknown(FourCc::new(*b"VP8\0"))
        );
    }
}

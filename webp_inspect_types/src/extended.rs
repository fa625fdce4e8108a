//! Types for the `VP8X` (extended format) chunk.

/// Feature flags from the `VP8X` chunk.
///
/// Only the raw byte is stored. Each feature is read out of it on demand, so
/// the two can never disagree.
///
/// The byte is laid out as `Rsv|Rsv|I|L|E|X|A|R`, most significant bit first:
///
/// ```
/// use webp_inspect_types::ExtendedFeatures;
///
/// let features = ExtendedFeatures::new(0b0010_1000);
/// assert!(features.icc());
/// assert!(features.exif());
/// assert!(!features.alpha());
/// assert!(!features.xmp());
/// assert!(!features.animation());
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct ExtendedFeatures {
    flags: u8,
}

impl ExtendedFeatures {
    /// Bit of the ICC profile flag (`I`).
    pub const ICC_BIT: u8 = 5;
    /// Bit of the alpha flag (`L`).
    pub const ALPHA_BIT: u8 = 4;
    /// Bit of the Exif flag (`E`).
    pub const EXIF_BIT: u8 = 3;
    /// Bit of the XMP flag (`X`).
    pub const XMP_BIT: u8 = 2;
    /// Bit of the animation flag (`A`).
    pub const ANIMATION_BIT: u8 = 1;

    /// Wraps a raw flags byte.
    pub const fn new(flags: u8) -> Self {
        Self { flags }
    }

    /// The raw flags byte, reserved bits included.
    pub const fn flags(&self) -> u8 {
        self.flags
    }

    const fn bit(&self, position: u8) -> bool {
        ((self.flags >> position) & 1) == 1
    }

    /// The file has an `ICCP` color profile chunk.
    pub const fn icc(&self) -> bool {
        self.bit(Self::ICC_BIT)
    }

    /// Some image in the file has alpha.
    pub const fn alpha(&self) -> bool {
        self.bit(Self::ALPHA_BIT)
    }

    /// The file has an `EXIF` chunk.
    pub const fn exif(&self) -> bool {
        self.bit(Self::EXIF_BIT)
    }

    /// The file has an `XMP ` chunk.
    pub const fn xmp(&self) -> bool {
        self.bit(Self::XMP_BIT)
    }

    /// The file is animated, so `ANIM` and `ANMF` chunks follow.
    pub const fn animation(&self) -> bool {
        self.bit(Self::ANIMATION_BIT)
    }
}

/// The logical size of the whole image.
///
/// For animations, individual frames may be smaller than this.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct Canvas {
    /// Width in pixels. Always in `1..=(1 << 24)`.
    pub width: u32,

    /// Height in pixels. Always in `1..=(1 << 24)`.
    pub height: u32,
}

impl Canvas {
    /// Builds a canvas from the "minus one" values stored in the file.
    ///
    /// Only the low 24 bits of each value are used.
    ///
    /// ```
    /// use webp_inspect_types::Canvas;
    ///
    /// let canvas = Canvas::from_minus_one(0, 479);
    /// assert_eq!((canvas.width, canvas.height), (1, 480));
    /// ```
    pub const fn from_minus_one(width_minus_one: u32, height_minus_one: u32) -> Self {
        const MASK: u32 = 0x00FF_FFFF;
        Self {
            width: (width_minus_one & MASK) + 1,
            height: (height_minus_one & MASK) + 1,
        }
    }
}

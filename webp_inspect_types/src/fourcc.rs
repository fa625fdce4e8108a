/// A four-character code, used to identify RIFF chunks.
///
/// The bytes aren't validated in any way. When displayed, each byte is
/// mapped directly to the character with the same value.
///
/// ```
/// use webp_inspect_types::FourCc;
///
/// let tag = FourCc::new(*b"VP8 ");
/// assert_eq!(tag, FourCc::VP8);
/// assert_eq!(tag.to_string(), "VP8 ");
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct FourCc(pub [u8; 4]);

impl FourCc {
    /// The RIFF container tag.
    pub const RIFF: Self = Self(*b"RIFF");

    /// The WebP form type, found right after the RIFF file size.
    pub const WEBP: Self = Self(*b"WEBP");

    /// A simple, lossy image.
    pub const VP8: Self = Self(*b"VP8 ");

    /// A simple, lossless image.
    pub const VP8L: Self = Self(*b"VP8L");

    /// The extended format header.
    pub const VP8X: Self = Self(*b"VP8X");

    /// Global animation parameters.
    pub const ANIM: Self = Self(*b"ANIM");

    /// One animation frame.
    pub const ANMF: Self = Self(*b"ANMF");

    /// Wraps four raw bytes.
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Returns the code as characters, one per byte.
    pub fn chars(&self) -> [char; 4] {
        self.0.map(char::from)
    }
}

impl From<[u8; 4]> for FourCc {
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}

impl PartialEq<[u8; 4]> for FourCc {
    fn eq(&self, other: &[u8; 4]) -> bool {
        self.0 == *other
    }
}

impl core::fmt::Display for FourCc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for c in self.chars() {
            core::fmt::Write::write_char(f, c)?;
        }
        Ok(())
    }
}

//! Reads fixed-size fields at absolute offsets in the input.
//!
//! Every WebP field we care about lives at an offset we can compute up front,
//! so instead of consuming the input front to back, each read gets its own
//! window starting at the requested offset.

use webp_inspect_types::FourCc;
use winnow::{
    Parser as _,
    binary::{le_u16, le_u24, le_u32, u8},
    error::EmptyError,
    token::take,
};

use crate::error::WebpParseError;

/// Checks whether bit `position` of `byte` is set.
///
/// Bit `0` is the least significant bit.
pub fn is_bit_set(byte: u8, position: u8) -> bool {
    ((byte >> position) & 1) == 1
}

/// A read-only view over the whole input.
#[derive(Clone, Copy, Debug)]
pub struct ByteReader<'input> {
    bytes: &'input [u8],
}

impl<'input> ByteReader<'input> {
    pub fn new(bytes: &'input [u8]) -> Self {
        Self { bytes }
    }

    /// The length of the input.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the input has no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Everything from `offset` onward.
    ///
    /// Empty if `offset` is past the end.
    fn window(&self, offset: usize) -> &'input [u8] {
        self.bytes.get(offset..).unwrap_or_default()
    }

    fn truncated(&self, field: &'static str, offset: usize, needed: usize) -> WebpParseError {
        log::error!(
            "Not enough bytes for {field}! Wanted `{needed}` at offset `{offset}`, \
            but the input is `{}` bytes long.",
            self.bytes.len()
        );
        WebpParseError::TruncatedInput {
            field,
            offset,
            needed,
            available: self.bytes.len(),
        }
    }

    /// Reads the `len` bytes starting at `offset`.
    pub fn bytes(
        &self,
        field: &'static str,
        offset: usize,
        len: usize,
    ) -> Result<&'input [u8], WebpParseError> {
        take(len)
            .parse_next(&mut self.window(offset))
            .map_err(|_e: EmptyError| self.truncated(field, offset, len))
    }

    /// Reads a four-character code.
    pub fn fourcc(&self, field: &'static str, offset: usize) -> Result<FourCc, WebpParseError> {
        let slice: &[u8] = self.bytes(field, offset, 4)?;

        // `take` gave us exactly four bytes, so this can't fail
        let Ok(arr) = <[u8; 4]>::try_from(slice) else {
            unreachable!("fourcc slice is known to be 4 bytes long. please report this bug!");
        };

        Ok(FourCc::new(arr))
    }

    pub fn u8(&self, field: &'static str, offset: usize) -> Result<u8, WebpParseError> {
        u8.parse_next(&mut self.window(offset))
            .map_err(|_e: EmptyError| self.truncated(field, offset, 1))
    }

    pub fn le_u16(&self, field: &'static str, offset: usize) -> Result<u16, WebpParseError> {
        le_u16
            .parse_next(&mut self.window(offset))
            .map_err(|_e: EmptyError| self.truncated(field, offset, 2))
    }

    /// Reads a 24-bit little-endian integer, zero-extended.
    pub fn le_u24(&self, field: &'static str, offset: usize) -> Result<u32, WebpParseError> {
        le_u24
            .parse_next(&mut self.window(offset))
            .map_err(|_e: EmptyError| self.truncated(field, offset, 3))
    }

    pub fn le_u32(&self, field: &'static str, offset: usize) -> Result<u32, WebpParseError> {
        le_u32
            .parse_next(&mut self.window(offset))
            .map_err(|_e: EmptyError| self.truncated(field, offset, 4))
    }
}

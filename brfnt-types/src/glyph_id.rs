//! Glyph Identifiers
//!
//! A glyph index is the position of a glyph's cell in the glyph sheets,
//! counted row by row and sheet by sheet. Although these are stored as u16s,
//! we choose to represent them as a distinct type.

/// A 16-bit glyph index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlyphId(u16);

impl GlyphId {
    /// The value used in table-mapped character maps for "no glyph".
    pub const NONE: GlyphId = GlyphId(0xFFFF);

    /// Construct a new `GlyphId`.
    pub const fn new(raw: u16) -> Self {
        GlyphId(raw)
    }

    /// The identifier as a u16.
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl std::fmt::Display for GlyphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GID_{}", self.0)
    }
}

impl From<u16> for GlyphId {
    fn from(value: u16) -> Self {
        GlyphId(value)
    }
}

crate::newtype_scalar!(GlyphId, [u8; 2]);

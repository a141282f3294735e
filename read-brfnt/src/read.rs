//! Traits for interpreting font data

use types::Tag;

use crate::font_data::FontData;

/// A type that can be read from raw block data.
///
/// This is implemented for every block in the resource. Implementations are
/// responsible for validating the block signature and for ensuring that any
/// variable-length data they describe is in bounds, so that accessors on the
/// parsed value do not need to fail.
pub trait FontRead<'a>: Sized {
    /// Read an instance of `Self` from the provided data, performing validation.
    fn read(data: FontData<'a>) -> Result<Self, ReadError>;
}

/// An error that occurs when reading font data
///
/// Every variant is fatal: a resource that produces any of these cannot be
/// converted, even partially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    OutOfBounds,
    /// A block did not start with the expected signature.
    InvalidMagic {
        expected: Tag,
        found: Tag,
    },
    InvalidByteOrderMark(u16),
    /// A pointer to a required block was null.
    NullOffset(Tag),
    /// The glyph sheet grid has no cells.
    InvalidGeometry {
        glyphs_per_row: u16,
        glyphs_per_column: u16,
    },
    /// A character map record links back to a record that was already read.
    CmapCycle(usize),
    CmapChainTooLong,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::InvalidMagic { expected, found } => {
                write!(f, "Invalid {expected} Magic: {found}")
            }
            ReadError::InvalidByteOrderMark(bom) => {
                write!(f, "Invalid Byte Order Mark: 0x{bom:04X}")
            }
            ReadError::NullOffset(tag) => write!(f, "The offset to the {tag} block is null"),
            ReadError::InvalidGeometry {
                glyphs_per_row,
                glyphs_per_column,
            } => write!(
                f,
                "Invalid glyph sheet geometry {glyphs_per_row}x{glyphs_per_column}"
            ),
            ReadError::CmapCycle(offset) => {
                write!(f, "CMAP record at 0x{offset:X} is linked more than once")
            }
            ReadError::CmapChainTooLong => write!(
                f,
                "CMAP chain has more than {} records",
                crate::tables::cmap::MAX_CMAP_RECORDS
            ),
        }
    }
}

impl std::error::Error for ReadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = ReadError::InvalidMagic {
            expected: Tag::new(b"FINF"),
            found: Tag::new(b"XXXX"),
        };
        assert_eq!(err.to_string(), "Invalid FINF Magic: XXXX");
        assert_eq!(
            ReadError::InvalidByteOrderMark(0xFFFE).to_string(),
            "Invalid Byte Order Mark: 0xFFFE"
        );
    }
}

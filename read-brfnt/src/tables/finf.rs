//! The font information block

use types::{BlockOffset, Tag};

use crate::{tables, FontData, FontRead, ReadError};

/// 'FINF'
pub const TAG: Tag = Tag::new(b"FINF");

/// Default horizontal metrics, used for characters without a width entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharWidths {
    /// Left side bearing
    pub left: i8,
    /// Width of the glyph image
    pub glyph_width: u8,
    /// Advance width
    pub char_width: u8,
}

/// The font information block.
///
/// This is the first block after the file header, and holds pointers to the
/// glyph sheet block and to the head of the character map chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Finf {
    block_size: u32,
    font_type: u8,
    line_feed: i8,
    alter_char_index: u16,
    default_widths: CharWidths,
    encoding: u8,
    glyph_sheets: BlockOffset,
    char_widths: BlockOffset,
    char_map: BlockOffset,
}

impl Finf {
    /// The size of this block, including the signature and size fields.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn font_type(&self) -> u8 {
        self.font_type
    }

    /// The distance between baselines of consecutive lines.
    pub fn line_feed(&self) -> i8 {
        self.line_feed
    }

    /// The glyph used for characters that are not in the character map.
    pub fn alter_char_index(&self) -> u16 {
        self.alter_char_index
    }

    pub fn default_widths(&self) -> CharWidths {
        self.default_widths
    }

    pub fn encoding(&self) -> u8 {
        self.encoding
    }

    /// The pointer to the `TGLP` block, as stored.
    pub fn glyph_sheets(&self) -> BlockOffset {
        self.glyph_sheets
    }

    /// The pointer to the first `CWDH` block, as stored.
    pub fn char_widths(&self) -> BlockOffset {
        self.char_widths
    }

    /// The pointer to the first `CMAP` record, as stored.
    pub fn char_map(&self) -> BlockOffset {
        self.char_map
    }

    /// The absolute position of the `TGLP` block.
    pub fn glyph_sheets_position(&self) -> Result<usize, ReadError> {
        self.glyph_sheets
            .resolve()
            .ok_or(ReadError::NullOffset(tables::tglp::TAG))
    }

    /// The absolute position of the first `CMAP` record.
    pub fn char_map_position(&self) -> Result<usize, ReadError> {
        self.char_map
            .resolve()
            .ok_or(ReadError::NullOffset(tables::cmap::TAG))
    }
}

impl<'a> FontRead<'a> for Finf {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        cursor.read_tag(TAG)?;
        Ok(Finf {
            block_size: cursor.read()?,
            font_type: cursor.read()?,
            line_feed: cursor.read()?,
            alter_char_index: cursor.read()?,
            default_widths: CharWidths {
                left: cursor.read()?,
                glyph_width: cursor.read()?,
                char_width: cursor.read()?,
            },
            encoding: cursor.read()?,
            glyph_sheets: cursor.read()?,
            char_widths: cursor.read()?,
            char_map: cursor.read()?,
        })
    }
}

//! The glyph sheet block

use types::Tag;

use crate::{FontData, FontRead, ReadError};

/// 'TGLP'
pub const TAG: Tag = Tag::new(b"TGLP");

/// The grid that glyph cells are laid out on, in each glyph sheet.
///
/// Glyph indices are assigned row by row, left to right, and continue onto
/// the next sheet once a sheet is full.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SheetGeometry {
    pub glyphs_per_row: u16,
    pub glyphs_per_column: u16,
}

impl SheetGeometry {
    /// Create a new geometry, rejecting grids with no cells.
    pub fn new(glyphs_per_row: u16, glyphs_per_column: u16) -> Result<Self, ReadError> {
        if glyphs_per_row == 0 || glyphs_per_column == 0 {
            return Err(ReadError::InvalidGeometry {
                glyphs_per_row,
                glyphs_per_column,
            });
        }
        Ok(SheetGeometry {
            glyphs_per_row,
            glyphs_per_column,
        })
    }

    /// The number of glyph cells on one sheet.
    pub fn cells_per_sheet(&self) -> usize {
        self.glyphs_per_row as usize * self.glyphs_per_column as usize
    }

    /// The number of sheets needed to hold `glyph_count` glyphs.
    pub fn sheets_for(&self, glyph_count: usize) -> usize {
        glyph_count.div_ceil(self.cells_per_sheet())
    }
}

/// The glyph sheet block.
///
/// Only the grid geometry is needed to reconstruct the glyph order; the
/// remaining fields describe the sheet images and are exposed for
/// completeness. The sheet dimensions and image position that follow the
/// grid are optional, since a block may end right after the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tglp {
    block_size: u32,
    cell_width: u8,
    cell_height: u8,
    baseline: i8,
    max_char_width: u8,
    sheet_size: u32,
    sheet_count: u16,
    sheet_format: u16,
    geometry: SheetGeometry,
    sheet_width: Option<u16>,
    sheet_height: Option<u16>,
    sheet_image_offset: Option<u32>,
}

impl Tglp {
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn cell_width(&self) -> u8 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u8 {
        self.cell_height
    }

    /// The baseline position, measured from the top of a cell.
    pub fn baseline(&self) -> i8 {
        self.baseline
    }

    pub fn max_char_width(&self) -> u8 {
        self.max_char_width
    }

    /// The size in bytes of a single sheet image.
    pub fn sheet_size(&self) -> u32 {
        self.sheet_size
    }

    pub fn sheet_count(&self) -> u16 {
        self.sheet_count
    }

    /// The texture format of the sheet images.
    pub fn sheet_format(&self) -> u16 {
        self.sheet_format
    }

    pub fn geometry(&self) -> SheetGeometry {
        self.geometry
    }

    pub fn glyphs_per_row(&self) -> u16 {
        self.geometry.glyphs_per_row
    }

    pub fn glyphs_per_column(&self) -> u16 {
        self.geometry.glyphs_per_column
    }

    pub fn sheet_width(&self) -> Option<u16> {
        self.sheet_width
    }

    pub fn sheet_height(&self) -> Option<u16> {
        self.sheet_height
    }

    /// The absolute position of the first sheet image.
    pub fn sheet_image_offset(&self) -> Option<u32> {
        self.sheet_image_offset
    }
}

impl<'a> FontRead<'a> for Tglp {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        cursor.read_tag(TAG)?;
        let block_size = cursor.read()?;
        let cell_width = cursor.read()?;
        let cell_height = cursor.read()?;
        let baseline = cursor.read()?;
        let max_char_width = cursor.read()?;
        let sheet_size = cursor.read()?;
        let sheet_count = cursor.read()?;
        let sheet_format = cursor.read()?;
        let geometry = SheetGeometry::new(cursor.read()?, cursor.read()?)?;
        Ok(Tglp {
            block_size,
            cell_width,
            cell_height,
            baseline,
            max_char_width,
            sheet_size,
            sheet_count,
            sheet_format,
            geometry,
            sheet_width: cursor.read().ok(),
            sheet_height: cursor.read().ok(),
            sheet_image_offset: cursor.read().ok(),
        })
    }
}

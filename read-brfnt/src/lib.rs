//! Reading binary font resources (`.brfnt`)
//!
//! A binary font resource is a big-endian container made of a file header
//! followed by a sequence of blocks, each starting with a four-byte
//! signature:
//!
//! - `FINF`, the font information block, which points at the other blocks
//! - `TGLP`, which describes the glyph sheet images and the grid of glyph
//!   cells they are divided into
//! - `CMAP`, a linked list of records mapping character codes to glyph
//!   indices
//!
//! This crate validates the container, locates those blocks, and decodes the
//! character map into a [`GlyphMap`]: the characters of the font in the order
//! their glyphs appear on the sheets.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use read_brfnt::RfntRef;
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let font = RfntRef::new(&font_bytes).expect("failed to read font data");
//! let tglp = font.tglp().expect("missing glyph sheets");
//! let glyphs = font.glyph_map().expect("malformed character map");
//!
//! println!(
//!     "{} glyphs on a {}x{} grid",
//!     glyphs.len(),
//!     tglp.glyphs_per_row(),
//!     tglp.glyphs_per_column()
//! );
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod font_data;
mod glyph_map;
mod read;
pub mod tables;

pub use font_data::{Cursor, FontData};
pub use glyph_map::GlyphMap;
pub use read::{FontRead, ReadError};

/// Public re-export of the brfnt-types crate.
pub extern crate brfnt_types as types;

use tables::{cmap::CmapChain, finf::Finf, rfnt::RfntHeader, tglp::Tglp};

/// Reference to an in-memory font resource.
///
/// Constructing this validates the file header and the font information
/// block; the other blocks are read on demand.
#[derive(Clone, Debug)]
pub struct RfntRef<'a> {
    data: FontData<'a>,
    header: RfntHeader,
    finf: Finf,
}

impl<'a> RfntRef<'a> {
    /// Creates a new reference to an in-memory font resource.
    pub fn new(data: &'a [u8]) -> Result<Self, ReadError> {
        let data = FontData::new(data);
        let header = RfntHeader::read(data)?;
        log::debug!(
            "RFNT version {}, {} blocks, {} bytes",
            header.version(),
            header.block_count(),
            header.file_length()
        );
        let finf = Self::read_block(data, header.header_length() as usize)?;
        Ok(RfntRef { data, header, finf })
    }

    /// Returns the underlying font data.
    pub fn data(&self) -> FontData<'a> {
        self.data
    }

    pub fn header(&self) -> &RfntHeader {
        &self.header
    }

    pub fn finf(&self) -> &Finf {
        &self.finf
    }

    /// Read the glyph sheet block.
    pub fn tglp(&self) -> Result<Tglp, ReadError> {
        let position = self.finf.glyph_sheets_position()?;
        Self::read_block(self.data, position)
    }

    /// Returns an iterator over the records of the character map.
    pub fn cmap_records(&self) -> Result<CmapChain<'a>, ReadError> {
        let position = self.finf.char_map_position()?;
        Ok(CmapChain::new(self.data, position))
    }

    /// Decode the whole character map.
    ///
    /// This fails if any record in the chain is malformed; no partial map
    /// is returned.
    pub fn glyph_map(&self) -> Result<GlyphMap, ReadError> {
        let mut glyphs = GlyphMap::new();
        for record in self.cmap_records()? {
            glyphs.add_record(&record?);
        }
        Ok(glyphs)
    }

    fn read_block<T: FontRead<'a>>(data: FontData<'a>, position: usize) -> Result<T, ReadError> {
        log::debug!(
            "reading {} at 0x{position:X}",
            std::any::type_name::<T>().rsplit("::").next().unwrap_or("block")
        );
        data.split_off(position)
            .ok_or(ReadError::OutOfBounds)
            .and_then(T::read)
    }
}

#[cfg(test)]
mod tests {
    use brfnt_test_data::rfnt::{self, RfntBuilder};
    use pretty_assertions::assert_eq;
    use types::{BlockOffset, GlyphId, Tag};

    use super::*;

    fn codes(map: &GlyphMap) -> Vec<(u16, u16)> {
        map.iter().map(|(g, c)| (g.to_u16(), c)).collect()
    }

    #[test]
    fn read_blocks() {
        let buf = RfntBuilder::new(5, 3).direct(0x41, 0x43, 0).build();
        let font = RfntRef::new(&buf).unwrap();
        assert_eq!(font.header().header_length(), 16);
        assert_eq!(font.header().file_length() as usize, buf.len());
        let tglp = font.tglp().unwrap();
        assert_eq!(tglp.glyphs_per_row(), 5);
        assert_eq!(tglp.glyphs_per_column(), 3);
        assert_eq!(
            codes(&font.glyph_map().unwrap()),
            [(0, 0x41), (1, 0x42), (2, 0x43)]
        );
    }

    #[test]
    fn all_records_contribute() {
        let buf = RfntBuilder::new(4, 4)
            .direct(0x20, 0x22, 0)
            .table(0x30, 0x33, &[3, 0xFFFF, 5, 4])
            .scan(&[(0x3042, 7), (0x41, 6)])
            .build();
        let font = RfntRef::new(&buf).unwrap();
        assert_eq!(font.cmap_records().unwrap().count(), 3);
        assert_eq!(
            codes(&font.glyph_map().unwrap()),
            [
                (0, 0x20),
                (1, 0x21),
                (2, 0x22),
                (3, 0x30),
                (4, 0x33),
                (5, 0x32),
                (6, 0x41),
                (7, 0x3042),
            ]
        );
    }

    #[test]
    fn scan_order_follows_glyph_index() {
        let buf = RfntBuilder::new(2, 2)
            .scan(&[(0x43, 2), (0x41, 0), (0x42, 1)])
            .build();
        let glyphs = RfntRef::new(&buf).unwrap().glyph_map().unwrap();
        assert_eq!(glyphs.codes().collect::<Vec<_>>(), [0x41, 0x42, 0x43]);
    }

    #[test]
    fn duplicate_glyphs_last_write_wins() {
        let buf = RfntBuilder::new(2, 2)
            .direct(0x41, 0x42, 0)
            .scan(&[(0x5A, 1)])
            .build();
        let glyphs = RfntRef::new(&buf).unwrap().glyph_map().unwrap();
        assert_eq!(glyphs.get(GlyphId::new(1)), Some(0x5A));
        assert_eq!(glyphs.len(), 2);
    }

    #[test]
    fn unknown_kind_is_skipped() {
        let buf = RfntBuilder::new(2, 2)
            .direct(0x41, 0x41, 0)
            .unknown(9, 0x61, 0x7A)
            .direct(0x42, 0x42, 1)
            .build();
        let glyphs = RfntRef::new(&buf).unwrap().glyph_map().unwrap();
        assert_eq!(codes(&glyphs), [(0, 0x41), (1, 0x42)]);
    }

    #[test]
    fn bad_byte_order_mark() {
        let mut buf = RfntBuilder::new(2, 2).direct(0x41, 0x41, 0).build();
        buf.write_at(rfnt::BYTE_ORDER_MARK, 0xFFFE_u16);
        assert_eq!(
            RfntRef::new(&buf).unwrap_err(),
            ReadError::InvalidByteOrderMark(0xFFFE)
        );
    }

    #[test]
    fn bad_finf_magic() {
        let mut buf = RfntBuilder::new(2, 2).direct(0x41, 0x41, 0).build();
        buf.write_at(rfnt::FINF, Tag::new(b"FNIF"));
        assert_eq!(
            RfntRef::new(&buf).unwrap_err(),
            ReadError::InvalidMagic {
                expected: tables::finf::TAG,
                found: Tag::new(b"FNIF")
            }
        );
    }

    #[test]
    fn bad_tglp_magic() {
        let mut buf = RfntBuilder::new(2, 2).direct(0x41, 0x41, 0).build();
        buf.write_at(rfnt::TGLP, Tag::new(b"XXXX"));
        let font = RfntRef::new(&buf).unwrap();
        assert!(matches!(
            font.tglp(),
            Err(ReadError::InvalidMagic { expected, .. }) if expected == tables::tglp::TAG
        ));
    }

    #[test]
    fn bad_magic_later_in_chain_fails_everything() {
        let mut buf = RfntBuilder::new(2, 2)
            .direct(0x41, 0x41, 0)
            .direct(0x42, 0x42, 1)
            .direct(0x43, 0x43, 2)
            .build();
        buf.write_at(&rfnt::cmap(2), Tag::new(b"CMAQ"));
        let font = RfntRef::new(&buf).unwrap();
        assert_eq!(
            font.glyph_map(),
            Err(ReadError::InvalidMagic {
                expected: tables::cmap::TAG,
                found: Tag::new(b"CMAQ")
            })
        );
    }

    #[test]
    fn chain_cycle() {
        let mut buf = RfntBuilder::new(2, 2)
            .direct(0x41, 0x41, 0)
            .direct(0x42, 0x42, 1)
            .build();
        let first = buf.offset_for(&rfnt::cmap(0)) as u32;
        buf.write_at(&rfnt::cmap_next(1), BlockOffset::for_block_at(first));
        let font = RfntRef::new(&buf).unwrap();
        assert_eq!(
            font.glyph_map(),
            Err(ReadError::CmapCycle(first as usize))
        );
    }

    #[test]
    fn chain_length_is_capped() {
        let mut builder = RfntBuilder::new(2, 2);
        for _ in 0..=tables::cmap::MAX_CMAP_RECORDS {
            builder = builder.direct(0x41, 0x41, 0);
        }
        let buf = builder.build();
        let font = RfntRef::new(&buf).unwrap();
        assert_eq!(font.glyph_map(), Err(ReadError::CmapChainTooLong));
    }

    #[test]
    fn chain_at_cap_is_accepted() {
        let mut builder = RfntBuilder::new(2, 2);
        for i in 0..tables::cmap::MAX_CMAP_RECORDS {
            builder = builder.direct(0x41, 0x41, i as u16);
        }
        let buf = builder.build();
        let glyphs = RfntRef::new(&buf).unwrap().glyph_map().unwrap();
        assert_eq!(glyphs.len(), tables::cmap::MAX_CMAP_RECORDS);
    }

    #[test]
    fn null_cmap_pointer() {
        let mut buf = RfntBuilder::new(2, 2).direct(0x41, 0x41, 0).build();
        buf.write_at(rfnt::CMAP_POINTER, BlockOffset::NULL);
        let font = RfntRef::new(&buf).unwrap();
        assert_eq!(
            font.glyph_map(),
            Err(ReadError::NullOffset(tables::cmap::TAG))
        );
    }

    #[test]
    fn not_a_font() {
        assert!(RfntRef::new(b"NOT_A_FONT").is_err());
        assert_eq!(RfntRef::new(b"RF").unwrap_err(), ReadError::OutOfBounds);
    }
}

//! Building complete font resources for tests.
//!
//! The builder lays out a minimal resource: the file header, a `FINF` block
//! at 0x10, a `TGLP` block at 0x30, and then one `CMAP` block per record,
//! each linked to the next. Interesting locations are tagged, so tests can
//! corrupt them with [`BeBuffer::write_at`].

use brfnt_types::{BlockOffset, MajorMinor, Tag, BYTE_ORDER_MARK as BOM};

use crate::bebuffer::BeBuffer;

/// The byte order mark in the file header.
pub const BYTE_ORDER_MARK: &str = "rfnt.bom";
/// The file length in the file header.
pub const FILE_LENGTH: &str = "rfnt.file_length";
/// The signature of the `FINF` block.
pub const FINF: &str = "finf";
/// The pointer to the `TGLP` block, in `FINF`.
pub const TGLP_POINTER: &str = "finf.tglp";
/// The pointer to the first `CMAP` record, in `FINF`.
pub const CMAP_POINTER: &str = "finf.cmap";
/// The signature of the `TGLP` block.
pub const TGLP: &str = "tglp";
/// The grid width in the `TGLP` block.
pub const GLYPHS_PER_ROW: &str = "tglp.glyphs_per_row";

const FINF_POSITION: u32 = 0x10;
const TGLP_POSITION: u32 = 0x30;

/// The signature of the `CMAP` record at `index` in the chain.
pub fn cmap(index: usize) -> String {
    format!("cmap[{index}]")
}

/// The next pointer of the `CMAP` record at `index` in the chain.
pub fn cmap_next(index: usize) -> String {
    format!("cmap[{index}].next")
}

fn cmap_size(index: usize) -> String {
    format!("cmap[{index}].size")
}

#[derive(Clone, Debug)]
enum Record {
    Direct {
        first: u16,
        last: u16,
        first_glyph: u16,
    },
    Table {
        first: u16,
        last: u16,
        glyphs: Vec<u16>,
    },
    Scan(Vec<(u16, u16)>),
    Unknown {
        kind: u16,
        first: u16,
        last: u16,
    },
}

/// Builds a font resource with a given grid and character map.
#[derive(Clone, Debug)]
pub struct RfntBuilder {
    glyphs_per_row: u16,
    glyphs_per_column: u16,
    records: Vec<Record>,
}

impl RfntBuilder {
    pub fn new(glyphs_per_row: u16, glyphs_per_column: u16) -> Self {
        RfntBuilder {
            glyphs_per_row,
            glyphs_per_column,
            records: Vec::new(),
        }
    }

    /// Map `first..=last` to consecutive glyphs starting at `first_glyph`.
    pub fn direct(mut self, first: u16, last: u16, first_glyph: u16) -> Self {
        self.records.push(Record::Direct {
            first,
            last,
            first_glyph,
        });
        self
    }

    /// Map `first..=last` through a table with one glyph per code.
    ///
    /// The table is written as given, even if its length does not match the
    /// range.
    pub fn table(mut self, first: u16, last: u16, glyphs: &[u16]) -> Self {
        self.records.push(Record::Table {
            first,
            last,
            glyphs: glyphs.to_vec(),
        });
        self
    }

    /// Add a list of (code, glyph) pairs.
    pub fn scan(mut self, pairs: &[(u16, u16)]) -> Self {
        self.records.push(Record::Scan(pairs.to_vec()));
        self
    }

    /// Add a record with an unrecognized mapping kind and no body.
    pub fn unknown(mut self, kind: u16, first: u16, last: u16) -> Self {
        self.records.push(Record::Unknown { kind, first, last });
        self
    }

    pub fn build(&self) -> BeBuffer {
        let block_count = (2 + self.records.len()).min(u16::MAX as usize) as u16;
        let mut buf = crate::be_buffer! {
            (Tag::new(b"RFNT")),
            {BOM: "rfnt.bom"},
            (MajorMinor::VERSION_1_4),
            {0u32: "rfnt.file_length"},
            (FINF_POSITION as u16),
            (block_count)
        };
        assert_eq!(buf.len(), FINF_POSITION as usize);

        buf = buf
            .push_with_tag(Tag::new(b"FINF"), FINF)
            .push(0x20_u32)
            .push(1_u8) // font type
            .push(0x1A_i8) // line feed
            .push(0_u16) // alter char index
            .extend([0_u8, 0x10, 0x10]) // default widths
            .push(1_u8) // encoding
            .push_with_tag(BlockOffset::for_block_at(TGLP_POSITION), TGLP_POINTER)
            .push(BlockOffset::NULL) // widths
            .push_with_tag(BlockOffset::NULL, CMAP_POINTER)
            .extend([0_u8; 4]); // height, width, ascent, reserved
        assert_eq!(buf.len(), TGLP_POSITION as usize);

        buf = buf
            .push_with_tag(Tag::new(b"TGLP"), TGLP)
            .push(0x20_u32)
            .extend([0x18_u8, 0x1A]) // cell width, height
            .push(0x14_i8) // baseline
            .push(0x17_u8) // max char width
            .push(0x20000_u32) // sheet size
            .push(1_u16) // sheet count
            .push(0_u16) // sheet format
            .push_with_tag(self.glyphs_per_row, GLYPHS_PER_ROW)
            .push(self.glyphs_per_column)
            .push(0x100_u16) // sheet width
            .push(0x200_u16) // sheet height
            .push(0_u32); // sheet image

        for (i, record) in self.records.iter().enumerate() {
            let start = buf.len();
            let pointer = BlockOffset::for_block_at(start as u32);
            if i == 0 {
                buf.write_at(CMAP_POINTER, pointer);
            } else {
                buf.write_at(&cmap_next(i - 1), pointer);
            }
            buf = write_record(buf, i, record).align_to(4);
            let size = (buf.len() - start) as u32;
            buf.write_at(&cmap_size(i), size);
        }

        let file_length = buf.len() as u32;
        buf.write_at(FILE_LENGTH, file_length);
        buf
    }
}

fn write_record(buf: BeBuffer, index: usize, record: &Record) -> BeBuffer {
    let (first, last, kind) = match record {
        Record::Direct { first, last, .. } => (*first, *last, 0),
        Record::Table { first, last, .. } => (*first, *last, 1),
        Record::Scan(_) => (0, 0xFFFF, 2),
        Record::Unknown { kind, first, last } => (*first, *last, *kind),
    };
    let buf = buf
        .push_with_tag(Tag::new(b"CMAP"), &cmap(index))
        .push_with_tag(0_u32, &cmap_size(index))
        .push(first)
        .push(last)
        .push(kind)
        .push(0_u16) // reserved
        .push_with_tag(BlockOffset::NULL, &cmap_next(index));
    match record {
        Record::Direct { first_glyph, .. } => buf.push(*first_glyph),
        Record::Table { glyphs, .. } => buf.extend(glyphs.iter().copied()),
        Record::Scan(pairs) => pairs
            .iter()
            .fold(buf.push(pairs.len() as u16), |buf, (code, glyph)| {
                buf.push(*code).push(*glyph)
            }),
        Record::Unknown { .. } => buf,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let buf = RfntBuilder::new(2, 2)
            .direct(0x41, 0x42, 0)
            .scan(&[(0x20, 2)])
            .build();
        assert_eq!(buf.offset_for(FINF), 0x10);
        assert_eq!(buf.offset_for(TGLP), 0x30);
        assert_eq!(buf.offset_for(&cmap(0)), 0x50);
        // 20 byte header, 2 byte body, 2 bytes padding
        assert_eq!(buf.offset_for(&cmap(1)), 0x68);
        assert_eq!(&buf[0x50..0x54], b"CMAP");
        assert_eq!(&buf[8..12], (buf.len() as u32).to_be_bytes());
        // the pointer to the first record
        assert_eq!(&buf[0x28..0x2C], 0x58_u32.to_be_bytes());
        // the last record ends the chain
        let last_next = buf.offset_for(&cmap_next(1));
        assert_eq!(&buf[last_next..last_next + 4], [0, 0, 0, 0]);
    }
}

//! Character map records
//!
//! The character map is a singly linked list of `CMAP` blocks. Each block
//! covers a range of character codes and maps them to glyph indices using
//! one of three encodings, described by [`MappingKind`].

use std::collections::HashSet;
use std::ops::RangeInclusive;

use types::{BlockOffset, FixedSize, GlyphId, Tag};

use crate::{FontData, FontRead, ReadError};

/// 'CMAP'
pub const TAG: Tag = Tag::new(b"CMAP");

/// The maximum number of records we will follow in a single chain.
pub const MAX_CMAP_RECORDS: usize = 0x10000;

/// How a record maps its character codes to glyph indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MappingKind {
    /// Consecutive codes map to consecutive glyphs, starting at a base glyph.
    Direct,
    /// One glyph index per code in the range; `0xFFFF` means no glyph.
    Table,
    /// An explicit list of (code, glyph) pairs. The code range is ignored.
    Scan,
    /// A kind this reader does not know about. Records of this kind map
    /// nothing.
    Unknown(u16),
}

impl MappingKind {
    pub fn new(raw: u16) -> Self {
        match raw {
            0 => MappingKind::Direct,
            1 => MappingKind::Table,
            2 => MappingKind::Scan,
            other => MappingKind::Unknown(other),
        }
    }
}

/// A single record in the character map chain.
#[derive(Clone, Debug)]
pub struct CmapRecord<'a> {
    block_size: u32,
    first_char: u16,
    last_char: u16,
    kind: MappingKind,
    next: BlockOffset,
    body: CmapBody<'a>,
}

#[derive(Clone, Debug)]
enum CmapBody<'a> {
    Direct { first_glyph: u16 },
    // validated to hold one u16 per code in the range
    Table { glyph_ids: FontData<'a> },
    // validated to hold `count` (code, glyph) pairs
    Scan { count: u16, entries: FontData<'a> },
    Empty,
}

impl<'a> CmapRecord<'a> {
    /// The size of this block, including the signature and size fields.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// The first character code covered by this record.
    pub fn first_char(&self) -> u16 {
        self.first_char
    }

    /// The last character code covered by this record, inclusive.
    pub fn last_char(&self) -> u16 {
        self.last_char
    }

    pub fn mapping_kind(&self) -> MappingKind {
        self.kind
    }

    /// The pointer to the next record, as stored.
    pub fn next(&self) -> BlockOffset {
        self.next
    }

    /// The range of character codes declared by this record.
    ///
    /// This is empty if the last code is before the first.
    pub fn char_range(&self) -> RangeInclusive<u32> {
        self.first_char as u32..=self.last_char as u32
    }

    /// For a `Direct` record, the glyph of the first character in the range.
    pub fn first_glyph(&self) -> Option<GlyphId> {
        match self.body {
            CmapBody::Direct { first_glyph } => Some(GlyphId::new(first_glyph)),
            _ => None,
        }
    }

    /// Returns an iterator over the (character code, glyph) pairs in this
    /// record, in the order they are stored.
    ///
    /// Table entries equal to `0xFFFF` are not included. `Scan` pairs are
    /// yielded as stored, even if they are not sorted or contain `0xFFFF`.
    pub fn iter(&self) -> CmapRecordIter<'a> {
        let codes = self.char_range();
        let inner = match self.body {
            CmapBody::Direct { first_glyph } => IterInner::Direct {
                codes,
                first_char: self.first_char,
                first_glyph,
            },
            CmapBody::Table { glyph_ids } => IterInner::Table {
                codes,
                first_char: self.first_char,
                glyph_ids,
            },
            CmapBody::Scan { count, entries } => IterInner::Scan {
                index: 0,
                count: count as usize,
                entries,
            },
            CmapBody::Empty => IterInner::Empty,
        };
        CmapRecordIter { inner }
    }

    fn code_count(first_char: u16, last_char: u16) -> usize {
        (last_char as usize + 1).saturating_sub(first_char as usize)
    }
}

impl<'a> FontRead<'a> for CmapRecord<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        cursor.read_tag(TAG)?;
        let block_size = cursor.read()?;
        let first_char = cursor.read()?;
        let last_char = cursor.read()?;
        let kind = MappingKind::new(cursor.read()?);
        cursor.advance::<u16>();
        let next = cursor.read()?;

        let body = match kind {
            MappingKind::Direct => CmapBody::Direct {
                first_glyph: cursor.read()?,
            },
            MappingKind::Table => {
                let len = Self::code_count(first_char, last_char) * u16::RAW_BYTE_LEN;
                let glyph_ids = cursor
                    .remaining()?
                    .slice(..len)
                    .ok_or(ReadError::OutOfBounds)?;
                CmapBody::Table { glyph_ids }
            }
            MappingKind::Scan => {
                let count: u16 = cursor.read()?;
                let len = count as usize * 2 * u16::RAW_BYTE_LEN;
                let entries = cursor
                    .remaining()?
                    .slice(..len)
                    .ok_or(ReadError::OutOfBounds)?;
                CmapBody::Scan { count, entries }
            }
            MappingKind::Unknown(raw) => {
                log::debug!(
                    "skipping CMAP record at 0x{:X} with unknown mapping kind {raw}",
                    data.position()
                );
                CmapBody::Empty
            }
        };

        Ok(CmapRecord {
            block_size,
            first_char,
            last_char,
            kind,
            next,
            body,
        })
    }
}

/// Iterator over the (character code, glyph) pairs of a [`CmapRecord`].
#[derive(Clone)]
pub struct CmapRecordIter<'a> {
    inner: IterInner<'a>,
}

#[derive(Clone)]
enum IterInner<'a> {
    Direct {
        codes: RangeInclusive<u32>,
        first_char: u16,
        first_glyph: u16,
    },
    Table {
        codes: RangeInclusive<u32>,
        first_char: u16,
        glyph_ids: FontData<'a>,
    },
    Scan {
        index: usize,
        count: usize,
        entries: FontData<'a>,
    },
    Empty,
}

impl Iterator for CmapRecordIter<'_> {
    type Item = (u16, GlyphId);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Direct {
                codes,
                first_char,
                first_glyph,
            } => {
                let code = codes.next()?;
                // glyph indices wrap, as they would in a 16-bit counter
                let delta = (code - *first_char as u32) as u16;
                Some((code as u16, GlyphId::new(first_glyph.wrapping_add(delta))))
            }
            IterInner::Table {
                codes,
                first_char,
                glyph_ids,
            } => loop {
                let code = codes.next()?;
                let index = (code - *first_char as u32) as usize;
                let glyph: GlyphId = glyph_ids.read_at(index * u16::RAW_BYTE_LEN).ok()?;
                if glyph != GlyphId::NONE {
                    return Some((code as u16, glyph));
                }
            },
            IterInner::Scan {
                index,
                count,
                entries,
            } => {
                if *index >= *count {
                    return None;
                }
                let pos = *index * 2 * u16::RAW_BYTE_LEN;
                *index += 1;
                let code: u16 = entries.read_at(pos).ok()?;
                let glyph: GlyphId = entries.read_at(pos + u16::RAW_BYTE_LEN).ok()?;
                Some((code, glyph))
            }
            IterInner::Empty => None,
        }
    }
}

/// Iterator over the records in a character map chain.
///
/// Records are read lazily. Any error ends the iteration after it is
/// yielded; this includes a record that links back to a record that has
/// already been visited, and a chain longer than [`MAX_CMAP_RECORDS`].
#[derive(Clone, Debug)]
pub struct CmapChain<'a> {
    data: FontData<'a>,
    next: Option<usize>,
    visited: HashSet<usize>,
}

impl<'a> CmapChain<'a> {
    /// Create a chain starting with the record at `position`.
    ///
    /// `data` is the data for the whole file, since record pointers are
    /// absolute.
    pub fn new(data: FontData<'a>, position: usize) -> Self {
        CmapChain {
            data,
            next: Some(position),
            visited: HashSet::new(),
        }
    }

    fn read_record(&mut self, position: usize) -> Result<CmapRecord<'a>, ReadError> {
        if !self.visited.insert(position) {
            return Err(ReadError::CmapCycle(position));
        }
        if self.visited.len() > MAX_CMAP_RECORDS {
            return Err(ReadError::CmapChainTooLong);
        }
        let record = self
            .data
            .split_off(position)
            .ok_or(ReadError::OutOfBounds)
            .and_then(CmapRecord::read)?;
        log::debug!(
            "CMAP record at 0x{position:X}: {:?} 0x{:04X}..=0x{:04X}",
            record.mapping_kind(),
            record.first_char(),
            record.last_char()
        );
        Ok(record)
    }
}

impl<'a> Iterator for CmapChain<'a> {
    type Item = Result<CmapRecord<'a>, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.next.take()?;
        let record = self.read_record(position);
        if let Ok(record) = &record {
            self.next = record.next().resolve();
        }
        Some(record)
    }
}

//! The mapping from glyph index to character code

use std::collections::BTreeMap;

use types::GlyphId;

use crate::tables::cmap::CmapRecord;

/// An ordered mapping from glyph index to the UTF-16 code unit that the
/// glyph renders.
///
/// Iteration is always in ascending glyph order, which is the order in which
/// glyphs are laid out on the glyph sheets. If more than one character maps
/// to the same glyph, the last one inserted wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphMap {
    map: BTreeMap<GlyphId, u16>,
}

impl GlyphMap {
    pub fn new() -> Self {
        Default::default()
    }

    /// Map `glyph` to `code`, returning the code it previously mapped to.
    pub fn insert(&mut self, glyph: GlyphId, code: u16) -> Option<u16> {
        self.map.insert(glyph, code)
    }

    /// Add all of the mappings in a character map record.
    pub fn add_record(&mut self, record: &CmapRecord) {
        for (code, glyph) in record.iter() {
            if let Some(prev) = self.insert(glyph, code) {
                log::debug!("{glyph} remapped from U+{prev:04X} to U+{code:04X}");
            }
        }
    }

    /// The character code for `glyph`, if any.
    pub fn get(&self, glyph: GlyphId) -> Option<u16> {
        self.map.get(&glyph).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over (glyph, character code) pairs in ascending glyph order.
    pub fn iter(&self) -> impl Iterator<Item = (GlyphId, u16)> + '_ {
        self.map.iter().map(|(glyph, code)| (*glyph, *code))
    }

    /// Iterate over character codes in ascending glyph order.
    pub fn codes(&self) -> impl ExactSizeIterator<Item = u16> + '_ {
        self.map.values().copied()
    }
}

impl FromIterator<(GlyphId, u16)> for GlyphMap {
    fn from_iter<T: IntoIterator<Item = (GlyphId, u16)>>(iter: T) -> Self {
        GlyphMap {
            map: iter.into_iter().collect(),
        }
    }
}

impl Extend<(GlyphId, u16)> for GlyphMap {
    fn extend<T: IntoIterator<Item = (GlyphId, u16)>>(&mut self, iter: T) {
        self.map.extend(iter)
    }
}

//! The letter-order document model.
//!
//! A letter-order document lists the characters of a font in the order their
//! glyphs are laid out on the glyph sheets, one page per sheet and one line
//! per row of glyph cells.

use std::borrow::Cow;

use read_brfnt::{tables::tglp::SheetGeometry, GlyphMap};

/// The version of the letter-order format we write.
pub const FORMAT_VERSION: &str = "1.1";
pub const GENERATOR_NAME: &str = "brfnt2xlor";
pub const GENERATOR_VERSION: &str = "1, 0, 0, 0";

/// The token used for the space character.
pub const SPACE_TOKEN: &str = "<sp/>";
/// The token used for a glyph cell that holds no character.
pub const EMPTY_TOKEN: &str = "<null/>";

/// A complete letter-order document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterOrder {
    pub head: Head,
    pub area: Area,
    pub pages: Vec<Page>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Head {
    pub create: Create,
    pub title: String,
}

/// Who created the document, where and when.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Create {
    pub user: String,
    pub host: String,
    pub date: String,
}

/// The size of the glyph grid on each page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Area {
    pub width: u16,
    pub height: u16,
}

/// One glyph sheet: `height` rows of `width` slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub rows: Vec<Vec<Slot>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// A character, as an escaped markup token.
    Glyph(Cow<'static, str>),
    /// A cell past the last glyph of the font.
    Empty,
}

impl Slot {
    /// The markup written for this slot.
    pub fn token(&self) -> &str {
        match self {
            Slot::Glyph(token) => token,
            Slot::Empty => EMPTY_TOKEN,
        }
    }
}

impl LetterOrder {
    /// Lay out the characters of `glyphs` on pages of the given geometry.
    ///
    /// Characters fill each page row by row in ascending glyph order; the
    /// last page is padded with empty slots.
    pub fn new(head: Head, geometry: SheetGeometry, glyphs: &GlyphMap) -> Self {
        let mut tokens = glyphs.codes().map(rendered_char);
        let mut pages = Vec::with_capacity(geometry.sheets_for(glyphs.len()));
        for _ in 0..geometry.sheets_for(glyphs.len()) {
            let mut page = Page::default();
            for _ in 0..geometry.glyphs_per_column {
                let row = (0..geometry.glyphs_per_row)
                    .map(|_| tokens.next().map(Slot::Glyph).unwrap_or(Slot::Empty))
                    .collect();
                page.rows.push(row);
            }
            pages.push(page);
        }
        LetterOrder {
            head,
            area: Area {
                width: geometry.glyphs_per_row,
                height: geometry.glyphs_per_column,
            },
            pages,
        }
    }
}

impl Head {
    pub fn new(create: Create, title: impl Into<String>) -> Self {
        Head {
            create,
            title: title.into(),
        }
    }
}

impl Create {
    /// Describe the current user, host, and local time.
    pub fn from_environment() -> Self {
        Create {
            user: first_env(&["USER", "USERNAME"]).unwrap_or_else(|| "unknown".into()),
            host: host_name().unwrap_or_else(|| "unknown".into()),
            date: chrono::Local::now()
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string(),
        }
    }
}

fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
}

fn host_name() -> Option<String> {
    first_env(&["HOSTNAME", "COMPUTERNAME"]).or_else(|| {
        let name = std::fs::read_to_string("/etc/hostname").ok()?;
        let name = name.trim();
        (!name.is_empty()).then(|| name.to_string())
    })
}

/// The markup token for a single UTF-16 code unit.
///
/// Markup-significant characters are escaped, the space and the no-break
/// space get tokens that cannot be confused with layout whitespace, and a
/// lone surrogate becomes U+FFFD.
pub fn rendered_char(code: u16) -> Cow<'static, str> {
    match code {
        0x26 => "&amp;".into(),
        0x3C => "&lt;".into(),
        0x3E => "&gt;".into(),
        0x20 => SPACE_TOKEN.into(),
        0x27 => "&apos;".into(),
        0x22 => "&quot;".into(),
        0xA0 => "&#x00A0;".into(),
        other => char::from_u32(other as u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
            .to_string()
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use read_brfnt::types::GlyphId;

    use super::*;

    fn head() -> Head {
        Head::new(
            Create {
                user: "tester".into(),
                host: "localhost".into(),
                date: "2024-01-02T03:04:05".into(),
            },
            "test",
        )
    }

    fn glyphs(codes: &[u16]) -> GlyphMap {
        codes
            .iter()
            .enumerate()
            .map(|(i, code)| (GlyphId::new(i as u16), *code))
            .collect()
    }

    fn tokens(page: &Page) -> Vec<Vec<&str>> {
        page.rows
            .iter()
            .map(|row| row.iter().map(Slot::token).collect())
            .collect()
    }

    #[test]
    fn escaping() {
        let cases = [
            (0x26, "&amp;"),
            (0x3C, "&lt;"),
            (0x3E, "&gt;"),
            (0x20, "<sp/>"),
            (0x27, "&apos;"),
            (0x22, "&quot;"),
            (0xA0, "&#x00A0;"),
            (0x41, "A"),
            (0x3042, "あ"),
            (0x09, "\t"),
        ];
        for (code, expected) in cases {
            assert_eq!(rendered_char(code), expected, "U+{code:04X}");
        }
    }

    #[test]
    fn lone_surrogates() {
        assert_eq!(rendered_char(0xD800), "\u{FFFD}");
        assert_eq!(rendered_char(0xDFFF), "\u{FFFD}");
    }

    #[test]
    fn pagination() {
        let geometry = SheetGeometry::new(2, 2).unwrap();
        let glyphs = glyphs(&[0x41, 0x42, 0x43, 0x44, 0x45]);
        let doc = LetterOrder::new(head(), geometry, &glyphs);
        assert_eq!(doc.area, Area { width: 2, height: 2 });
        assert_eq!(doc.pages.len(), 2);
        assert_eq!(tokens(&doc.pages[0]), [["A", "B"], ["C", "D"]]);
        assert_eq!(
            tokens(&doc.pages[1]),
            [["E", "<null/>"], ["<null/>", "<null/>"]]
        );
    }

    #[test]
    fn exact_fit_has_no_padding_page() {
        let geometry = SheetGeometry::new(3, 1).unwrap();
        let doc = LetterOrder::new(head(), geometry, &glyphs(&[0x20, 0x26, 0x61]));
        assert_eq!(doc.pages.len(), 1);
        assert_eq!(tokens(&doc.pages[0]), [["<sp/>", "&amp;", "a"]]);
    }

    #[test]
    fn follows_glyph_order_not_insertion_order() {
        let mut map = GlyphMap::new();
        map.insert(GlyphId::new(2), 0x43);
        map.insert(GlyphId::new(0), 0x41);
        map.insert(GlyphId::new(1), 0x42);
        let doc = LetterOrder::new(head(), SheetGeometry::new(4, 1).unwrap(), &map);
        assert_eq!(tokens(&doc.pages[0]), [["A", "B", "C", "<null/>"]]);
    }

    #[test]
    fn gaps_in_glyph_indices_are_not_slots() {
        // glyph indices are only used for ordering
        let map: GlyphMap = [(GlyphId::new(0), 0x41), (GlyphId::new(7), 0x42)]
            .into_iter()
            .collect();
        let doc = LetterOrder::new(head(), SheetGeometry::new(2, 1).unwrap(), &map);
        assert_eq!(doc.pages.len(), 1);
        assert_eq!(tokens(&doc.pages[0]), [["A", "B"]]);
    }

    #[test]
    fn empty_font() {
        let geometry = SheetGeometry::new(2, 2).unwrap();
        let doc = LetterOrder::new(head(), geometry, &GlyphMap::new());
        assert!(doc.pages.is_empty());
    }
}

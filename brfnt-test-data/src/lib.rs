//! test data shared between the brfnt crates.
//!
//! Rather than checking in binary fonts, tests build the resources they need
//! with [`rfnt::RfntBuilder`], or byte by byte with [`be_buffer!`].

pub mod bebuffer;
pub mod rfnt;

/// A small but complete font on a 6x4 grid (two sheets): the uppercase
/// letters, a table-mapped range with unmapped codes, and some scattered
/// punctuation including the space and the no-break space.
pub fn sample_font() -> bebuffer::BeBuffer {
    rfnt::RfntBuilder::new(6, 4)
        // 'A'..='Z'
        .direct(0x41, 0x5A, 0)
        // '"', '&' and '\'', with no glyphs for '#', '$' or '%'
        .table(0x22, 0x27, &[26, 0xFFFF, 0xFFFF, 0xFFFF, 27, 28])
        .scan(&[(0x3E, 30), (0x20, 31), (0x3C, 29), (0xA0, 32)])
        .build()
}

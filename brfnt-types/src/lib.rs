//! Common scalar data types used in binary font resources (`.brfnt`)
//!
//! These are the building blocks shared by the reader and by the test data
//! builders: big-endian scalar decoding, block signatures, block pointers
//! and glyph indices.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod glyph_id;
mod offset;
mod raw;
mod tag;
mod version;

pub use glyph_id::GlyphId;
pub use offset::BlockOffset;
pub use raw::{FixedSize, Scalar};
pub use tag::Tag;
pub use version::MajorMinor;

/// The byte order mark of a big-endian resource.
pub const BYTE_ORDER_MARK: u16 = 0xFEFF;

//! Offsets between blocks

/// A pointer from one block to another.
///
/// Block pointers are absolute file positions, but they point at the data
/// that follows the target's 8-byte block header (the signature and the
/// block size), rather than at the signature itself. They are stored as
/// signed 32-bit values; anything that does not resolve to a positive
/// position is treated as null.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockOffset(i32);

impl BlockOffset {
    /// The size of the header (signature + size) that precedes block data.
    pub const BLOCK_HEADER_LEN: i64 = 8;

    /// A null offset.
    pub const NULL: BlockOffset = BlockOffset(0);

    /// Create a new offset from its stored value.
    pub const fn new(raw: i32) -> Self {
        BlockOffset(raw)
    }

    /// The value as stored in the file.
    pub const fn to_i32(self) -> i32 {
        self.0
    }

    /// Create the stored form of a pointer to the block whose signature
    /// starts at `position`.
    pub const fn for_block_at(position: u32) -> Self {
        BlockOffset((position as i64 + Self::BLOCK_HEADER_LEN) as i32)
    }

    /// The absolute position of the target block's signature, or `None`
    /// if the corrected position is not positive.
    pub const fn resolve(self) -> Option<usize> {
        let position = self.0 as i64 - Self::BLOCK_HEADER_LEN;
        if position > 0 {
            Some(position as usize)
        } else {
            None
        }
    }

    /// `true` if this offset does not point anywhere.
    pub const fn is_null(self) -> bool {
        self.resolve().is_none()
    }
}

crate::newtype_scalar!(BlockOffset, [u8; 4]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve() {
        assert_eq!(BlockOffset::new(0x38).resolve(), Some(0x30));
        assert_eq!(BlockOffset::new(9).resolve(), Some(1));
        assert_eq!(BlockOffset::new(8).resolve(), None);
        assert_eq!(BlockOffset::new(0).resolve(), None);
        assert_eq!(BlockOffset::new(-1).resolve(), None);
        assert!(BlockOffset::NULL.is_null());
    }

    #[test]
    fn round_trip_position() {
        assert_eq!(BlockOffset::for_block_at(0x30).to_i32(), 0x38);
        assert_eq!(BlockOffset::for_block_at(0x30).resolve(), Some(0x30));
    }
}

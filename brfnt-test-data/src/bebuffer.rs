//! small utilities used in tests

use brfnt_types::Scalar;
use std::collections::HashMap;

/// A convenience type for generating a buffer of big-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct BeBuffer {
    data: Vec<u8>,
    tagged_locations: HashMap<String, usize>,
}

impl BeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer contains zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return a reference to the contents of the buffer
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl Scalar) -> Self {
        self.data.extend(item.to_raw().as_ref());
        self
    }

    /// Write a scalar, remembering its location so it can be patched later.
    pub fn push_with_tag(mut self, item: impl Scalar, tag: &str) -> Self {
        self.tagged_locations
            .insert(tag.to_string(), self.data.len());
        self.data.extend(item.to_raw().as_ref());
        self
    }

    /// Write multiple scalars into the buffer
    pub fn extend<T: Scalar>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            self.data.extend(item.to_raw().as_ref());
        }
        self
    }

    /// Append zero bytes until the length is a multiple of `alignment`.
    pub fn align_to(mut self, alignment: usize) -> Self {
        let padded = self.data.len().next_multiple_of(alignment);
        self.data.resize(padded, 0);
        self
    }

    /// The location of a tagged write.
    ///
    /// # Panics
    ///
    /// Panics if `tag` was never used.
    pub fn offset_for(&self, tag: &str) -> usize {
        // panic on unrecognized tags
        self.tagged_locations.get(tag).copied().unwrap()
    }

    fn data_for(&mut self, tag: &str) -> &mut [u8] {
        let offset = self.offset_for(tag);
        &mut self.data[offset..]
    }

    /// Overwrite the bytes at a tagged location.
    pub fn write_at(&mut self, tag: &str, item: impl Scalar) {
        let data = self.data_for(tag);
        let raw = item.to_raw();
        let new_data: &[u8] = raw.as_ref();

        if data.len() < new_data.len() {
            panic!("not enough room left in buffer for the requested write.");
        }

        for (left, right) in data.iter_mut().zip(new_data) {
            *left = *right
        }
    }
}

impl std::ops::Deref for BeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Build a [`BeBuffer`] from a list of items.
///
/// Each item is one of:
///
/// - a literal, `4_u16`
/// - an array of literals, `[1u8, 4]`
/// - a tagged value, `{0u32: "file_length"}`, whose location can later be
///   passed to [`BeBuffer::write_at`]
/// - a parenthesized expression, `(Tag::new(b"RFNT"))`
#[macro_export]
macro_rules! be_buffer {
    ( $( $item:tt ),* $(,)? ) => {
        {
            #[allow(unused_mut)]
            let mut buffer = $crate::bebuffer::BeBuffer::new();
            $(
                buffer = $crate::be_buffer_add!(buffer, $item);
            )*
            buffer
        }
    };
}

/// Append a single item to a [`BeBuffer`]; see [`be_buffer!`].
#[macro_export]
macro_rules! be_buffer_add {
    ($b:ident, $v:literal) => {
        $b.push($v)
    };
    ($b:ident, [$($v:literal),+ $(,)?]) => {
        $b.extend([$($v),*])
    };
    ($b:ident, {$v:tt : $tag:literal}) => {
        $b.push_with_tag($v, $tag)
    };
    ($b:ident, ($v:expr)) => {
        $b.push($v)
    };
}

#[cfg(test)]
mod tests {
    use brfnt_types::Tag;

    #[test]
    fn macro_items() {
        let mut buf = be_buffer! {
            (Tag::new(b"RFNT")),
            0xFEFF_u16,
            [1u8, 4],
            {0u32: "length"},
        };
        let len = buf.len() as u32;
        buf.write_at("length", len);
        assert_eq!(buf.offset_for("length"), 8);
        assert_eq!(
            buf.as_slice(),
            [b'R', b'F', b'N', b'T', 0xFE, 0xFF, 1, 4, 0, 0, 0, 12]
        );
    }

    #[test]
    fn align() {
        let buf = be_buffer!(1_u16).align_to(4);
        assert_eq!(buf.as_slice(), [0, 1, 0, 0]);
        let buf = buf.align_to(4);
        assert_eq!(buf.len(), 4);
    }
}

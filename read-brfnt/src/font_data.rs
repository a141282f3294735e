//! raw font bytes

use std::ops::{Bound, RangeBounds};

use types::{FixedSize, Scalar, Tag};

use crate::read::ReadError;

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for parsing and validating that data.
///
/// A `FontData` remembers where it starts relative to the beginning of the
/// file, so that errors and log messages can report absolute positions even
/// after the data has been split.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    total_pos: u32,
    bytes: &'a [u8],
}

/// A cursor for reading a sequence of values.
///
/// Every read is bounds checked; reading past the end of the underlying
/// data returns [`ReadError::OutOfBounds`].
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData {
            total_pos: 0,
            bytes,
        }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The position of the start of this data, relative to the start of the file.
    pub fn position(&self) -> usize {
        self.total_pos as usize
    }

    /// Return the data starting at `pos`, or `None` if `pos` is past the end.
    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(|bytes| FontData {
            bytes,
            total_pos: self.total_pos.saturating_add(pos as u32),
        })
    }

    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let start = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(i) => *i,
            Bound::Excluded(i) => i.saturating_add(1),
        };

        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        let total_pos = self.total_pos.saturating_add(start as u32);
        self.bytes
            .get(bounds)
            .map(|bytes| FontData { bytes, total_pos })
    }

    /// Read a scalar value at `offset`, relative to the start of this data.
    pub fn read_at<T: Scalar>(&self, offset: usize) -> Result<T, ReadError> {
        self.bytes
            .get(offset..offset.saturating_add(<T as FixedSize>::RAW_BYTE_LEN))
            .and_then(T::read)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Return a cursor positioned at the start of this data.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    fn check_in_bounds(&self, offset: usize) -> Result<(), ReadError> {
        self.bytes
            .get(..offset)
            .ok_or(ReadError::OutOfBounds)
            .map(|_| ())
    }
}

impl<'a> Cursor<'a> {
    pub fn advance<T: FixedSize>(&mut self) {
        self.pos += <T as FixedSize>::RAW_BYTE_LEN
    }

    pub fn advance_by(&mut self, n_bytes: usize) {
        self.pos += n_bytes;
    }

    pub fn read<T: Scalar>(&mut self) -> Result<T, ReadError> {
        let temp = self.data.read_at(self.pos);
        self.pos += <T as FixedSize>::RAW_BYTE_LEN;
        temp
    }

    /// Read a signature and check that it matches `expected`.
    pub fn read_tag(&mut self, expected: Tag) -> Result<(), ReadError> {
        let found: Tag = self.read()?;
        if found != expected {
            return Err(ReadError::InvalidMagic { expected, found });
        }
        Ok(())
    }

    /// return the current position, or an error if we are out of bounds
    pub fn position(&self) -> Result<usize, ReadError> {
        self.data.check_in_bounds(self.pos).map(|_| self.pos)
    }

    /// Return the data from the current position to the end.
    pub fn remaining(&self) -> Result<FontData<'a>, ReadError> {
        self.data.split_off(self.pos).ok_or(ReadError::OutOfBounds)
    }

    pub fn remaining_bytes(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

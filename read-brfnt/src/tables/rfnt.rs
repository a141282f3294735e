//! The file header

use types::{MajorMinor, Tag, BYTE_ORDER_MARK};

use crate::{FontData, FontRead, ReadError};

/// 'RFNT'
pub const TAG: Tag = Tag::new(b"RFNT");

/// The fixed-size header at the start of every resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RfntHeader {
    version: MajorMinor,
    file_length: u32,
    header_length: u16,
    block_count: u16,
}

impl RfntHeader {
    /// The size of the header, in bytes.
    pub const RAW_BYTE_LEN: usize = 16;

    /// The format version. This is not validated.
    pub fn version(&self) -> MajorMinor {
        self.version
    }

    /// The total length of the file, as recorded in the header.
    pub fn file_length(&self) -> u32 {
        self.file_length
    }

    /// The absolute position of the first block (the `FINF` block).
    pub fn header_length(&self) -> u16 {
        self.header_length
    }

    /// The number of blocks that follow the header.
    pub fn block_count(&self) -> u16 {
        self.block_count
    }
}

impl<'a> FontRead<'a> for RfntHeader {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        cursor.read_tag(TAG)?;
        let bom: u16 = cursor.read()?;
        if bom != BYTE_ORDER_MARK {
            return Err(ReadError::InvalidByteOrderMark(bom));
        }
        Ok(RfntHeader {
            version: cursor.read()?,
            file_length: cursor.read()?,
            header_length: cursor.read()?,
            block_count: cursor.read()?,
        })
    }
}

/// A type representing a major, minor version pair.
///
/// The file header stores the version as two consecutive bytes. The version
/// is informational only; readers accept any value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MajorMinor {
    /// The major version number
    pub major: u8,
    /// The minor version number
    pub minor: u8,
}

impl MajorMinor {
    /// Version 1.4, written by the most common authoring tools.
    pub const VERSION_1_4: MajorMinor = MajorMinor::new(1, 4);

    /// Create a new version with major and minor parts.
    #[inline]
    pub const fn new(major: u8, minor: u8) -> Self {
        MajorMinor { major, minor }
    }

    /// The representation of this version as a big-endian byte array.
    #[inline]
    pub fn to_be_bytes(self) -> [u8; 2] {
        [self.major, self.minor]
    }
}

impl crate::Scalar for MajorMinor {
    type Raw = [u8; 2];

    fn from_raw(raw: Self::Raw) -> Self {
        Self {
            major: raw[0],
            minor: raw[1],
        }
    }

    fn to_raw(self) -> Self::Raw {
        self.to_be_bytes()
    }
}

impl std::fmt::Display for MajorMinor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

//! types for working with raw big-endian bytes

/// A trait for scalars stored in a font resource.
///
/// This is an internal trait for encoding and decoding big-endian bytes.
/// Every multi-byte value in an `RFNT` file is big-endian; the byte order
/// mark in the file header is checked before anything else is read.
pub trait Scalar: Sized {
    /// The raw byte representation of this type.
    type Raw: bytemuck::AnyBitPattern + Copy + AsRef<[u8]>;

    /// Create an instance of this type from raw big-endian bytes
    fn from_raw(raw: Self::Raw) -> Self;

    /// Encode this type as raw big-endian bytes
    fn to_raw(self) -> Self::Raw;

    /// Attempt to read a value from a slice.
    ///
    /// This returns `None` if the slice length does not exactly match
    /// the size of the raw representation.
    fn read(slice: &[u8]) -> Option<Self> {
        bytemuck::try_from_bytes::<Self::Raw>(slice)
            .ok()
            .copied()
            .map(Self::from_raw)
    }
}

/// A trait for types that have a known, constant size.
pub trait FixedSize: Sized {
    /// The raw size of this type, in bytes.
    ///
    /// This is the size required to represent this type in a font file,
    /// which may differ from the size of the native type.
    const RAW_BYTE_LEN: usize;
}

impl<T: Scalar> FixedSize for T {
    const RAW_BYTE_LEN: usize = std::mem::size_of::<T::Raw>();
}

/// An internal macro for implementing the `Scalar` trait for newtypes.
#[macro_export]
macro_rules! newtype_scalar {
    ($name:ident, $raw:ty) => {
        impl $crate::raw::Scalar for $name {
            type Raw = $raw;
            fn to_raw(self) -> $raw {
                $crate::raw::Scalar::to_raw(self.0)
            }

            fn from_raw(raw: $raw) -> Self {
                Self($crate::raw::Scalar::from_raw(raw))
            }
        }
    };
}

macro_rules! int_scalar {
    ($ty:ty, $raw:ty) => {
        impl crate::raw::Scalar for $ty {
            type Raw = $raw;
            fn to_raw(self) -> $raw {
                self.to_be_bytes()
            }

            fn from_raw(raw: $raw) -> $ty {
                Self::from_be_bytes(raw)
            }
        }
    };
}

int_scalar!(u8, [u8; 1]);
int_scalar!(i8, [u8; 1]);
int_scalar!(u16, [u8; 2]);
int_scalar!(i16, [u8; 2]);
int_scalar!(u32, [u8; 4]);
int_scalar!(i32, [u8; 4]);

//! Typed transfer of fixed-layout values
//!
//! A fixed-layout value moves between a stream and memory as a verbatim
//! copy of its native in-memory representation. No byte swapping is
//! performed; endianness is the caller's responsibility.

use crate::error::{StreamError, StreamResult};
use crate::stream::core::{ReadStream, WriteStream};

/// A fixed-size value whose byte representation is transferred verbatim.
pub trait FixedLayout: Copy {
    /// The `[u8; N]` array backing one value of this type.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    /// Reconstructs a value from its native-endian byte representation.
    fn from_bytes(bytes: Self::Bytes) -> Self;

    /// The native-endian byte representation of this value.
    fn to_bytes(self) -> Self::Bytes;
}

macro_rules! fixed_layout_numeric {
    ($($ty:ty => $size:expr),* $(,)?) => {
        $(
            impl FixedLayout for $ty {
                type Bytes = [u8; $size];

                fn from_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }

                fn to_bytes(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }
            }
        )*
    };
}

fixed_layout_numeric! {
    u8 => 1,
    i8 => 1,
    u16 => 2,
    i16 => 2,
    u32 => 4,
    i32 => 4,
    u64 => 8,
    i64 => 8,
    f32 => 4,
    f64 => 8,
}

/// Extension trait providing typed reads on any `ReadStream`
pub trait ReadStreamExt: ReadStream {
    /// Deserializes one `T` from the stream's byte cursor, advancing it
    /// by `size_of::<T>()`.
    ///
    /// Either the full value is transferred and the cursor advances by
    /// exactly its size, or `StreamError::EndOfStream` is returned and
    /// nothing is consumed: a stream that ends mid-value never yields
    /// a truncated value, and the trailing bytes stay readable.
    fn read_value<T: FixedLayout>(&mut self) -> StreamResult<T> {
        let mut bytes = T::Bytes::default();
        self.read_exact(bytes.as_mut())?;
        Ok(T::from_bytes(bytes))
    }
}

impl<R: ReadStream + ?Sized> ReadStreamExt for R {}

/// Extension trait providing typed writes on any `WriteStream`
pub trait WriteStreamExt: WriteStream {
    /// Serializes one `T` to the stream's byte cursor, advancing it by
    /// `size_of::<T>()`.
    ///
    /// A sink that cannot accept the full value yields
    /// `StreamError::ResourceExhausted`.
    fn write_value<T: FixedLayout>(&mut self, value: T) -> StreamResult<()> {
        let bytes = value.to_bytes();
        let src = bytes.as_ref();
        let mut written = 0;
        while written < src.len() {
            let n = self.write_bytes(&src[written..])?;
            if n == 0 {
                return Err(StreamError::ResourceExhausted);
            }
            written += n;
        }
        Ok(())
    }
}

impl<W: WriteStream + ?Sized> WriteStreamExt for W {}

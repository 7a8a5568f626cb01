//! Capability traits for byte streams
//!
//! Each trait describes one I/O ability, independently composable with
//! the others. Side effects are confined to the stream's own cursor and
//! resource state.

use crate::error::{StreamError, StreamResult};

/// Where a seek target is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOrigin {
    /// Absolute offset from the start of the stream
    Begin(u64),
    /// Signed offset from the current cursor position
    Current(i64),
    /// Signed offset from the end of the stream
    End(i64),
}

/// A stream that bytes can be read from.
pub trait ReadStream {
    /// Copies up to `dst.len()` bytes into `dst` and advances the
    /// cursor by the number of bytes copied.
    ///
    /// Returns fewer bytes than requested (including zero) only at
    /// end-of-data. Never blocks indefinitely; the memory and file
    /// backings are synchronous and bounded.
    fn read_bytes(&mut self, dst: &mut [u8]) -> StreamResult<usize>;

    /// Fills all of `dst` or fails with `StreamError::EndOfStream`.
    ///
    /// A failing read must not consume the trailing bytes: streams with
    /// a repositionable cursor override this to leave the cursor where
    /// it was, so a shorter typed read can still succeed afterwards.
    fn read_exact(&mut self, dst: &mut [u8]) -> StreamResult<()> {
        let mut filled = 0;
        while filled < dst.len() {
            let n = self.read_bytes(&mut dst[filled..])?;
            if n == 0 {
                return Err(StreamError::EndOfStream);
            }
            filled += n;
        }
        Ok(())
    }
}

/// A stream that bytes can be written to.
pub trait WriteStream {
    /// Copies up to `src.len()` bytes from `src` and advances the
    /// cursor by the number of bytes copied. A short write signals an
    /// exhausted backing resource.
    fn write_bytes(&mut self, src: &[u8]) -> StreamResult<usize>;

    /// Pushes any buffered bytes through to the backing resource.
    fn flush(&mut self) -> StreamResult<()>;
}

/// A stream with a repositionable cursor.
pub trait SeekStream {
    /// Repositions the cursor and returns the new absolute position.
    ///
    /// Fails with `StreamError::InvalidSeek` when the resulting
    /// position would fall outside the valid range of the stream.
    fn seek(&mut self, origin: SeekOrigin) -> StreamResult<u64>;

    /// Current absolute cursor position.
    fn position(&mut self) -> StreamResult<u64> {
        self.seek(SeekOrigin::Current(0))
    }

    /// Repositions the cursor to the start of the stream.
    fn rewind(&mut self) -> StreamResult<()> {
        self.seek(SeekOrigin::Begin(0)).map(|_| ())
    }
}

/// A stream that can inspect the next byte without consuming it.
///
/// Used by variable-length decoders that must look ahead before
/// committing a read.
pub trait PeekStream {
    /// The next byte, or `None` at end-of-data. The cursor does not
    /// advance.
    fn peek(&mut self) -> StreamResult<Option<u8>>;
}

impl<R: ReadStream + ?Sized> ReadStream for &mut R {
    fn read_bytes(&mut self, dst: &mut [u8]) -> StreamResult<usize> {
        (**self).read_bytes(dst)
    }

    fn read_exact(&mut self, dst: &mut [u8]) -> StreamResult<()> {
        (**self).read_exact(dst)
    }
}

impl<W: WriteStream + ?Sized> WriteStream for &mut W {
    fn write_bytes(&mut self, src: &[u8]) -> StreamResult<usize> {
        (**self).write_bytes(src)
    }

    fn flush(&mut self) -> StreamResult<()> {
        (**self).flush()
    }
}

impl<S: SeekStream + ?Sized> SeekStream for &mut S {
    fn seek(&mut self, origin: SeekOrigin) -> StreamResult<u64> {
        (**self).seek(origin)
    }
}

impl<P: PeekStream + ?Sized> PeekStream for &mut P {
    fn peek(&mut self) -> StreamResult<Option<u8>> {
        (**self).peek()
    }
}

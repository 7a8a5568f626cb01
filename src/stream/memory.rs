//! Streams backed by caller-owned memory regions
//!
//! Neither stream owns its buffer: the caller is responsible for
//! keeping the region alive and unmodified for the life of the stream,
//! which the borrow checker enforces here. Dropping a memory stream
//! never touches the underlying region.

use crate::error::{StreamError, StreamResult};
use crate::stream::core::{PeekStream, ReadStream, SeekOrigin, SeekStream, WriteStream};

fn resolve_seek(origin: SeekOrigin, cursor: usize, len: usize) -> StreamResult<usize> {
    let target: i64 = match origin {
        SeekOrigin::Begin(offset) => offset as i64,
        SeekOrigin::Current(offset) => cursor as i64 + offset,
        SeekOrigin::End(offset) => len as i64 + offset,
    };
    if target < 0 || target > len as i64 {
        return Err(StreamError::InvalidSeek { position: target });
    }
    Ok(target as usize)
}

/// A readable, seekable, peekable stream over a borrowed byte slice.
///
/// The cursor always satisfies `0 <= cursor <= len`; reading more bytes
/// than remain is an end-of-data condition, not an error of any other
/// kind. `reset` rebinds the stream to a new region so multiple
/// independent passes can share one stream object.
#[derive(Debug)]
pub struct MemoryReader<'a> {
    buf: &'a [u8],
    cursor: usize,
}

impl<'a> MemoryReader<'a> {
    /// Creates a reader over `buf` with the cursor at the start.
    pub fn new(buf: &'a [u8]) -> Self {
        MemoryReader { buf, cursor: 0 }
    }

    /// Rebinds the stream to a new region and resets the cursor to the
    /// start.
    pub fn reset(&mut self, buf: &'a [u8]) {
        self.buf = buf;
        self.cursor = 0;
    }

    /// Total length of the underlying region.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the underlying region is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes left between the cursor and the end of the region.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.cursor
    }
}

impl ReadStream for MemoryReader<'_> {
    fn read_bytes(&mut self, dst: &mut [u8]) -> StreamResult<usize> {
        let n = dst.len().min(self.remaining());
        dst[..n].copy_from_slice(&self.buf[self.cursor..self.cursor + n]);
        self.cursor += n;
        Ok(n)
    }

    fn read_exact(&mut self, dst: &mut [u8]) -> StreamResult<()> {
        // All or nothing: a short tail is left in place for smaller
        // reads instead of being consumed.
        if dst.len() > self.remaining() {
            return Err(StreamError::EndOfStream);
        }
        dst.copy_from_slice(&self.buf[self.cursor..self.cursor + dst.len()]);
        self.cursor += dst.len();
        Ok(())
    }
}

impl SeekStream for MemoryReader<'_> {
    fn seek(&mut self, origin: SeekOrigin) -> StreamResult<u64> {
        self.cursor = resolve_seek(origin, self.cursor, self.buf.len())?;
        Ok(self.cursor as u64)
    }
}

impl PeekStream for MemoryReader<'_> {
    fn peek(&mut self) -> StreamResult<Option<u8>> {
        Ok(self.buf.get(self.cursor).copied())
    }
}

/// A writable, seekable stream over a borrowed mutable byte slice.
///
/// The region is fixed-size: writing past its end is a short write, and
/// typed writes against a full region fail with
/// `StreamError::ResourceExhausted`.
#[derive(Debug)]
pub struct MemoryWriter<'a> {
    buf: &'a mut [u8],
    cursor: usize,
    // High-water mark of bytes ever written
    filled: usize,
}

impl<'a> MemoryWriter<'a> {
    /// Creates a writer over `buf` with the cursor at the start.
    pub fn new(buf: &'a mut [u8]) -> Self {
        MemoryWriter {
            buf,
            cursor: 0,
            filled: 0,
        }
    }

    /// Rebinds the stream to a new region, resetting the cursor and
    /// the high-water mark.
    pub fn reset(&mut self, buf: &'a mut [u8]) {
        self.buf = buf;
        self.cursor = 0;
        self.filled = 0;
    }

    /// Total length of the underlying region.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the underlying region is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The prefix of the region written so far (up to the high-water
    /// mark across all writes and seeks).
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.filled]
    }
}

impl WriteStream for MemoryWriter<'_> {
    fn write_bytes(&mut self, src: &[u8]) -> StreamResult<usize> {
        let n = src.len().min(self.buf.len() - self.cursor);
        self.buf[self.cursor..self.cursor + n].copy_from_slice(&src[..n]);
        self.cursor += n;
        self.filled = self.filled.max(self.cursor);
        Ok(n)
    }

    fn flush(&mut self) -> StreamResult<()> {
        Ok(())
    }
}

impl SeekStream for MemoryWriter<'_> {
    fn seek(&mut self, origin: SeekOrigin) -> StreamResult<u64> {
        self.cursor = resolve_seek(origin, self.cursor, self.buf.len())?;
        Ok(self.cursor as u64)
    }
}

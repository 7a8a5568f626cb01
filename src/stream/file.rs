//! Streams backed by an OS file handle
//!
//! The stream owns its handle exclusively and releases it on drop on
//! all exit paths, including error propagation. Unlike the memory
//! streams, every operation can fail with `StreamError::Io`; reaching
//! the end of the file is still reported as a plain short read.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::{StreamError, StreamResult};
use crate::stream::core::{ReadStream, SeekOrigin, SeekStream, WriteStream};

/// A readable, writable, seekable stream over an OS file.
#[derive(Debug)]
pub struct FileStream {
    file: File,
}

impl FileStream {
    /// Opens an existing file for reading (and seeking).
    ///
    /// Fails with `StreamError::Io` when the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> StreamResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::debug!("opened file stream for reading: {}", path.display());
        Ok(FileStream { file })
    }

    /// Creates (or truncates) a file open for reading and writing.
    pub fn create<P: AsRef<Path>>(path: P) -> StreamResult<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        log::debug!("created file stream: {}", path.display());
        Ok(FileStream { file })
    }
}

impl ReadStream for FileStream {
    fn read_bytes(&mut self, dst: &mut [u8]) -> StreamResult<usize> {
        Ok(self.file.read(dst)?)
    }

    fn read_exact(&mut self, dst: &mut [u8]) -> StreamResult<()> {
        let mut filled = 0;
        while filled < dst.len() {
            let n = self.file.read(&mut dst[filled..])?;
            if n == 0 {
                // Put the short tail back so the failed read consumes
                // nothing.
                self.file.seek(SeekFrom::Current(-(filled as i64)))?;
                return Err(StreamError::EndOfStream);
            }
            filled += n;
        }
        Ok(())
    }
}

impl WriteStream for FileStream {
    fn write_bytes(&mut self, src: &[u8]) -> StreamResult<usize> {
        Ok(self.file.write(src)?)
    }

    fn flush(&mut self) -> StreamResult<()> {
        Ok(self.file.flush()?)
    }
}

impl SeekStream for FileStream {
    fn seek(&mut self, origin: SeekOrigin) -> StreamResult<u64> {
        let target = match origin {
            SeekOrigin::Begin(offset) => SeekFrom::Start(offset),
            SeekOrigin::Current(offset) => SeekFrom::Current(offset),
            SeekOrigin::End(offset) => SeekFrom::End(offset),
        };
        self.file.seek(target).map_err(|err| {
            if err.kind() == std::io::ErrorKind::InvalidInput {
                // The OS rejects seeks before the start of the file.
                let position = match origin {
                    SeekOrigin::Begin(offset) => offset as i64,
                    SeekOrigin::Current(offset) | SeekOrigin::End(offset) => offset,
                };
                StreamError::InvalidSeek { position }
            } else {
                StreamError::from(err)
            }
        })
    }
}

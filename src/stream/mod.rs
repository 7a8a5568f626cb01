//! Byte stream layer: capability traits and concrete backings
//!
//! A concrete stream type implements exactly the capabilities its
//! backing medium supports; callers program against the minimal
//! capability set they need (`&mut impl ReadStream` rather than a
//! concrete stream type).

pub mod core;
pub mod file;
pub mod memory;

// Re-export capability traits and concrete streams
pub use self::core::{PeekStream, ReadStream, SeekOrigin, SeekStream, WriteStream};
pub use self::file::FileStream;
pub use self::memory::{MemoryReader, MemoryWriter};

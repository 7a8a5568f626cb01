pub mod codec;
pub mod error;
pub mod iter;
pub mod pipe;
pub mod pipeline;
pub mod stream;
pub mod typed;

// Re-export the core surface at the crate root
pub use codec::{decode_utf16, decode_utf8, encode_utf16, encode_utf8};
pub use error::{StreamError, StreamResult};
pub use iter::{ValueIter, ValuesExt};
pub use pipe::{Pipe, PipeExt, Sequence};
pub use pipeline::{Consumer, Generator};
pub use stream::{
    FileStream, MemoryReader, MemoryWriter, PeekStream, ReadStream, SeekOrigin, SeekStream,
    WriteStream,
};
pub use typed::{FixedLayout, ReadStreamExt, WriteStreamExt};

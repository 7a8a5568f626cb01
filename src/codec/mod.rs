//! Transform stages for pipeline composition
//!
//! Each codec is exposed as a [`Pipe`](crate::pipe::Pipe) constructor
//! so stages compose left to right with generators and consumers. A
//! decode stage validates as it goes and reports a
//! `StreamError::MalformedInput` for byte sequences its codec cannot
//! accept; it never substitutes or silently drops ill-formed input.

pub mod utf16;
pub mod utf8;

pub use utf16::{decode_utf16, encode_utf16};
pub use utf8::{decode_utf8, encode_utf8};

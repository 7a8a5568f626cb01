//! UTF-8 decode and encode stages
//!
//! The decoder validates continuation-byte structure, overlong forms,
//! surrogate code points, and the U+10FFFF ceiling. A truncated
//! multi-byte sequence at end of input is a malformed-input error, not
//! a silent drop.

use crate::error::{StreamError, StreamResult};
use crate::pipe::{Pipe, Sequence};

fn malformed(msg: &str) -> StreamError {
    StreamError::MalformedInput(msg.to_string())
}

/// Pull adapter decoding a byte sequence into Unicode scalar values.
pub struct Utf8Decode<I> {
    upstream: I,
    done: bool,
}

impl<I> Utf8Decode<I>
where
    I: Iterator<Item = StreamResult<u8>>,
{
    pub fn new(upstream: I) -> Self {
        Utf8Decode {
            upstream,
            done: false,
        }
    }

    fn fail(&mut self, msg: &str) -> Option<StreamResult<char>> {
        self.done = true;
        Some(Err(malformed(msg)))
    }

    fn pull_continuation(&mut self) -> Result<Option<u8>, StreamError> {
        match self.upstream.next() {
            Some(Ok(byte)) if byte & 0xC0 == 0x80 => Ok(Some(byte & 0x3F)),
            Some(Ok(_)) => Err(malformed("invalid UTF-8 continuation byte")),
            Some(Err(err)) => Err(err),
            None => Ok(None),
        }
    }
}

impl<I> Iterator for Utf8Decode<I>
where
    I: Iterator<Item = StreamResult<u8>>,
{
    type Item = StreamResult<char>;

    fn next(&mut self) -> Option<StreamResult<char>> {
        if self.done {
            return None;
        }
        let lead = match self.upstream.next() {
            Some(Ok(byte)) => byte,
            Some(Err(err)) => {
                self.done = true;
                return Some(Err(err));
            }
            None => {
                self.done = true;
                return None;
            }
        };
        // Sequence length and payload bits from the lead byte. 0xC0 and
        // 0xC1 can only start overlong encodings and 0xF5..=0xFF would
        // exceed U+10FFFF, so all of those are rejected outright.
        let (extra, mut scalar) = match lead {
            0x00..=0x7F => return Some(Ok(lead as char)),
            0xC2..=0xDF => (1, u32::from(lead & 0x1F)),
            0xE0..=0xEF => (2, u32::from(lead & 0x0F)),
            0xF0..=0xF4 => (3, u32::from(lead & 0x07)),
            _ => return self.fail("invalid UTF-8 lead byte"),
        };
        for _ in 0..extra {
            match self.pull_continuation() {
                Ok(Some(bits)) => scalar = (scalar << 6) | u32::from(bits),
                Ok(None) => {
                    return self.fail("truncated UTF-8 sequence at end of input");
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
        let min = match extra {
            1 => 0x80,
            2 => 0x800,
            _ => 0x10000,
        };
        if scalar < min {
            return self.fail("overlong UTF-8 encoding");
        }
        match char::from_u32(scalar) {
            Some(c) => Some(Ok(c)),
            // from_u32 rejects surrogates and values above U+10FFFF
            None => self.fail("UTF-8 sequence decodes to an invalid scalar value"),
        }
    }
}

/// Pull adapter encoding Unicode scalar values as UTF-8 bytes.
pub struct Utf8Encode<I> {
    upstream: I,
    // Encoded bytes of the current scalar not yet emitted
    pending: [u8; 4],
    pending_len: usize,
    pending_pos: usize,
    done: bool,
}

impl<I> Utf8Encode<I>
where
    I: Iterator<Item = StreamResult<char>>,
{
    pub fn new(upstream: I) -> Self {
        Utf8Encode {
            upstream,
            pending: [0; 4],
            pending_len: 0,
            pending_pos: 0,
            done: false,
        }
    }
}

impl<I> Iterator for Utf8Encode<I>
where
    I: Iterator<Item = StreamResult<char>>,
{
    type Item = StreamResult<u8>;

    fn next(&mut self) -> Option<StreamResult<u8>> {
        if self.pending_pos < self.pending_len {
            let byte = self.pending[self.pending_pos];
            self.pending_pos += 1;
            return Some(Ok(byte));
        }
        if self.done {
            return None;
        }
        match self.upstream.next() {
            Some(Ok(c)) => {
                let encoded = c.encode_utf8(&mut self.pending);
                self.pending_len = encoded.len();
                self.pending_pos = 1;
                Some(Ok(self.pending[0]))
            }
            Some(Err(err)) => {
                self.done = true;
                Some(Err(err))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// Stage decoding UTF-8 bytes into Unicode scalar values.
pub fn decode_utf8() -> Pipe<u8, char> {
    Pipe::new(|input| Sequence::new(Utf8Decode::new(input)))
}

/// Stage encoding Unicode scalar values as UTF-8 bytes.
pub fn encode_utf8() -> Pipe<char, u8> {
    Pipe::new(|input| Sequence::new(Utf8Encode::new(input)))
}

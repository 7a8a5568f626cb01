//! UTF-16 decode and encode stages
//!
//! Scalar values at or above U+10000 travel as surrogate pairs. An
//! unpaired surrogate (a lone trail unit, a lead unit followed by a
//! non-trail unit, or a dangling lead at end of input) is a
//! malformed-input error.

use crate::error::{StreamError, StreamResult};
use crate::pipe::{Pipe, Sequence};

const LEAD_START: u16 = 0xD800;
const TRAIL_START: u16 = 0xDC00;
const SURROGATE_END: u16 = 0xDFFF;

fn malformed(msg: &str) -> StreamError {
    StreamError::MalformedInput(msg.to_string())
}

/// Pull adapter decoding UTF-16 code units into Unicode scalar values.
pub struct Utf16Decode<I> {
    upstream: I,
    done: bool,
}

impl<I> Utf16Decode<I>
where
    I: Iterator<Item = StreamResult<u16>>,
{
    pub fn new(upstream: I) -> Self {
        Utf16Decode {
            upstream,
            done: false,
        }
    }

    fn fail(&mut self, msg: &str) -> Option<StreamResult<char>> {
        self.done = true;
        Some(Err(malformed(msg)))
    }
}

impl<I> Iterator for Utf16Decode<I>
where
    I: Iterator<Item = StreamResult<u16>>,
{
    type Item = StreamResult<char>;

    fn next(&mut self) -> Option<StreamResult<char>> {
        if self.done {
            return None;
        }
        let unit = match self.upstream.next() {
            Some(Ok(unit)) => unit,
            Some(Err(err)) => {
                self.done = true;
                return Some(Err(err));
            }
            None => {
                self.done = true;
                return None;
            }
        };
        if unit < LEAD_START || unit > SURROGATE_END {
            // Outside the surrogate range every u16 is a scalar value.
            return match char::from_u32(u32::from(unit)) {
                Some(c) => Some(Ok(c)),
                None => self.fail("UTF-16 unit decodes to an invalid scalar value"),
            };
        }
        if unit >= TRAIL_START {
            return self.fail("unexpected UTF-16 trail surrogate");
        }
        let trail = match self.upstream.next() {
            Some(Ok(trail)) if (TRAIL_START..=SURROGATE_END).contains(&trail) => trail,
            Some(Ok(_)) => return self.fail("UTF-16 lead surrogate not followed by a trail"),
            Some(Err(err)) => {
                self.done = true;
                return Some(Err(err));
            }
            None => return self.fail("dangling UTF-16 lead surrogate at end of input"),
        };
        let scalar = 0x10000
            + ((u32::from(unit - LEAD_START)) << 10)
            + u32::from(trail - TRAIL_START);
        match char::from_u32(scalar) {
            Some(c) => Some(Ok(c)),
            None => self.fail("UTF-16 pair decodes to an invalid scalar value"),
        }
    }
}

/// Pull adapter encoding Unicode scalar values as UTF-16 code units.
pub struct Utf16Encode<I> {
    upstream: I,
    // Trail unit of a surrogate pair awaiting emission
    pending_trail: Option<u16>,
    done: bool,
}

impl<I> Utf16Encode<I>
where
    I: Iterator<Item = StreamResult<char>>,
{
    pub fn new(upstream: I) -> Self {
        Utf16Encode {
            upstream,
            pending_trail: None,
            done: false,
        }
    }
}

impl<I> Iterator for Utf16Encode<I>
where
    I: Iterator<Item = StreamResult<char>>,
{
    type Item = StreamResult<u16>;

    fn next(&mut self) -> Option<StreamResult<u16>> {
        if let Some(trail) = self.pending_trail.take() {
            return Some(Ok(trail));
        }
        if self.done {
            return None;
        }
        match self.upstream.next() {
            Some(Ok(c)) => {
                let mut units = [0u16; 2];
                let encoded = c.encode_utf16(&mut units);
                if encoded.len() == 2 {
                    self.pending_trail = Some(units[1]);
                }
                Some(Ok(units[0]))
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

/// Stage decoding UTF-16 code units into Unicode scalar values.
pub fn decode_utf16() -> Pipe<u16, char> {
    Pipe::new(|input| Sequence::new(Utf16Decode::new(input)))
}

/// Stage encoding Unicode scalar values as UTF-16 code units.
pub fn encode_utf16() -> Pipe<char, u16> {
    Pipe::new(|input| Sequence::new(Utf16Encode::new(input)))
}

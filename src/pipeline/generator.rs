//! Sequence source backed by typed stream reads

use std::marker::PhantomData;

use crate::error::{StreamError, StreamResult};
use crate::pipe::{Pipe, Sequence};
use crate::stream::core::ReadStream;
use crate::typed::{FixedLayout, ReadStreamExt};

/// A lazy, finite, single-pass sequence of `T` pulled from a stream.
///
/// Each pull performs one typed read; the sequence ends when the source
/// reaches end-of-data. Any other failure is yielded once as an `Err`
/// element, after which the sequence ends.
#[derive(Debug)]
pub struct Generator<'a, T, S: ?Sized> {
    stream: &'a mut S,
    done: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T, S: ?Sized> Generator<'a, T, S> {
    /// Creates a generator pulling values of `T` from `stream`.
    pub fn new(stream: &'a mut S) -> Self {
        Generator {
            stream,
            done: false,
            _marker: PhantomData,
        }
    }
}

impl<'a, T, S> Generator<'a, T, S>
where
    T: FixedLayout + 'a,
    S: ReadStream + ?Sized + 'a,
{
    /// Boxes this generator as a [`Sequence`] for pipe composition.
    pub fn into_seq(self) -> Sequence<'a, T> {
        Sequence::new(self)
    }
}

impl<T, S> Iterator for Generator<'_, T, S>
where
    T: FixedLayout,
    S: ReadStream + ?Sized,
{
    type Item = StreamResult<T>;

    fn next(&mut self) -> Option<StreamResult<T>> {
        if self.done {
            return None;
        }
        match self.stream.read_value::<T>() {
            Ok(value) => Some(Ok(value)),
            Err(StreamError::EndOfStream) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<'a, T, S, O> std::ops::Shr<Pipe<T, O>> for Generator<'a, T, S>
where
    T: FixedLayout + 'a,
    S: ReadStream + ?Sized + 'a,
{
    type Output = Sequence<'a, O>;

    fn shr(self, pipe: Pipe<T, O>) -> Sequence<'a, O> {
        pipe.apply(self.into_seq())
    }
}

//! Iterator adapter over typed stream reads
//!
//! Wraps any `ReadStream` as a forward, input-only iterator of
//! fixed-layout values, so sequence algorithms can consume a stream
//! without re-deriving the end-of-data check at each call site.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::error::{StreamError, StreamResult};
use crate::stream::core::ReadStream;
use crate::typed::{FixedLayout, ReadStreamExt};

/// A forward iterator of `T` values pulled from a `ReadStream`.
///
/// End-of-data is the end of the iteration. A hard failure (an I/O
/// error, as opposed to running out of bytes) also terminates the
/// iteration; the error is retained and can be inspected with
/// [`ValueIter::error`] after the iterator returns `None`.
#[derive(Debug)]
pub struct ValueIter<'a, T, S: ?Sized> {
    stream: &'a mut S,
    error: Option<StreamError>,
    done: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T, S: ?Sized> ValueIter<'a, T, S> {
    pub(crate) fn new(stream: &'a mut S) -> Self {
        ValueIter {
            stream,
            error: None,
            done: false,
            _marker: PhantomData,
        }
    }

    /// The failure that terminated iteration early, if any.
    pub fn error(&self) -> Option<&StreamError> {
        self.error.as_ref()
    }

    /// Consumes the iterator, surfacing any terminating failure.
    pub fn into_result(self) -> StreamResult<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<T, S> Iterator for ValueIter<'_, T, S>
where
    T: FixedLayout,
    S: ReadStream + ?Sized,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        match self.stream.read_value::<T>() {
            Ok(value) => Some(value),
            Err(StreamError::EndOfStream) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.error = Some(err);
                self.done = true;
                None
            }
        }
    }
}

impl<T, S> FusedIterator for ValueIter<'_, T, S>
where
    T: FixedLayout,
    S: ReadStream + ?Sized,
{
}

/// Extension trait constructing a [`ValueIter`] from any `ReadStream`
pub trait ValuesExt: ReadStream {
    /// Iterates the remaining bytes of the stream as values of `T`.
    fn values<T: FixedLayout>(&mut self) -> ValueIter<'_, T, Self>
    where
        Self: Sized,
    {
        ValueIter::new(self)
    }
}

impl<R: ReadStream + ?Sized> ValuesExt for R {}

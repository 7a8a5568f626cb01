//! Sequence sink backed by typed stream writes

use std::marker::PhantomData;

use crate::error::StreamResult;
use crate::pipe::Sequence;
use crate::pipeline::Generator;
use crate::stream::core::{ReadStream, WriteStream};
use crate::typed::{FixedLayout, WriteStreamExt};

/// Drains an upstream sequence of `T` into a writable stream.
///
/// Draining pulls the upstream to exhaustion with one typed write per
/// element, halting on the first upstream or write failure.
#[derive(Debug)]
pub struct Consumer<'a, T, S: ?Sized> {
    stream: &'a mut S,
    _marker: PhantomData<fn(T)>,
}

impl<'a, T, S: ?Sized> Consumer<'a, T, S> {
    /// Creates a consumer writing values of `T` to `stream`.
    pub fn new(stream: &'a mut S) -> Self {
        Consumer {
            stream,
            _marker: PhantomData,
        }
    }
}

impl<T, S> Consumer<'_, T, S>
where
    T: FixedLayout,
    S: WriteStream + ?Sized,
{
    /// Pulls `upstream` to exhaustion, writing each element, and
    /// returns the number of elements written. The destination is
    /// flushed after a successful drain.
    pub fn drain<I>(mut self, upstream: I) -> StreamResult<usize>
    where
        I: IntoIterator<Item = StreamResult<T>>,
    {
        let mut count = 0;
        for item in upstream {
            self.stream.write_value(item?)?;
            count += 1;
        }
        self.stream.flush()?;
        log::trace!("pipeline drained {} elements", count);
        Ok(count)
    }
}

impl<'a, 'b, T, S> std::ops::Shr<Consumer<'b, T, S>> for Sequence<'a, T>
where
    T: FixedLayout,
    S: WriteStream + ?Sized,
{
    type Output = StreamResult<usize>;

    fn shr(self, sink: Consumer<'b, T, S>) -> StreamResult<usize> {
        sink.drain(self)
    }
}

impl<'a, 'b, T, S, D> std::ops::Shr<Consumer<'b, T, D>> for Generator<'a, T, S>
where
    T: FixedLayout,
    S: ReadStream + ?Sized,
    D: WriteStream + ?Sized,
{
    type Output = StreamResult<usize>;

    fn shr(self, sink: Consumer<'b, T, D>) -> StreamResult<usize> {
        sink.drain(self)
    }
}

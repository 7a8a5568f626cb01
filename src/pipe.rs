//! Lazy sequences and reusable pipe transformations
//!
//! A [`Sequence`] is a boxed, lazily evaluated pull sequence of
//! fallible elements; nothing upstream runs until the downstream end
//! requests the next element. A [`Pipe`] is a reusable transformation
//! from `Sequence<I>` to `Sequence<O>`, composable left to right.

use std::sync::Arc;

use crate::error::StreamResult;

/// A boxed, heap-allocated lazy pull sequence of `T`.
///
/// Elements are produced one at a time on demand; an `Err` element
/// carries a failure from the source stream or a transform stage.
pub struct Sequence<'a, T> {
    inner: Box<dyn Iterator<Item = StreamResult<T>> + 'a>,
}

impl<'a, T> Sequence<'a, T> {
    /// Wraps any fallible iterator as a sequence.
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = StreamResult<T>> + 'a,
    {
        Sequence {
            inner: Box::new(iter),
        }
    }

    /// A sequence over already-materialized values.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
        T: 'a,
    {
        Sequence::new(values.into_iter().map(Ok))
    }

    /// Drains the sequence into a vector, stopping at the first error.
    pub fn collect_values(self) -> StreamResult<Vec<T>> {
        self.inner.collect()
    }
}

impl<T> Iterator for Sequence<'_, T> {
    type Item = StreamResult<T>;

    fn next(&mut self) -> Option<StreamResult<T>> {
        self.inner.next()
    }
}

/// A Pipe represents a sequence transformation from one type to another.
/// It's a function from Sequence<I> to Sequence<O>.
pub struct Pipe<I, O> {
    f: Arc<dyn for<'a> Fn(Sequence<'a, I>) -> Sequence<'a, O>>,
}

impl<I, O> Clone for Pipe<I, O> {
    fn clone(&self) -> Self {
        Pipe {
            f: Arc::clone(&self.f),
        }
    }
}

impl<I, O> Pipe<I, O> {
    /// Create a new pipe from a function
    pub fn new<F>(f: F) -> Self
    where
        F: for<'a> Fn(Sequence<'a, I>) -> Sequence<'a, O> + 'static,
    {
        Pipe { f: Arc::new(f) }
    }

    /// Apply this pipe to a sequence
    pub fn apply<'a>(&self, input: Sequence<'a, I>) -> Sequence<'a, O> {
        (self.f)(input)
    }
}

/// Create a pipe that applies the given function to each element
pub fn map<I, O, F>(f: F) -> Pipe<I, O>
where
    F: Fn(I) -> O + Clone + 'static,
    I: 'static,
    O: 'static,
{
    Pipe::new(move |input| {
        let f = f.clone();
        Sequence::new(input.map(move |item| item.map(|value| f(value))))
    })
}

/// Create a pipe that filters elements based on the predicate
///
/// Errors always pass through to the downstream end.
pub fn filter<I, F>(predicate: F) -> Pipe<I, I>
where
    F: Fn(&I) -> bool + Clone + 'static,
    I: 'static,
{
    Pipe::new(move |input| {
        let predicate = predicate.clone();
        Sequence::new(input.filter(move |item| match item {
            Ok(value) => predicate(value),
            Err(_) => true,
        }))
    })
}

/// Compose two pipes together
pub fn compose<I, M, O>(p1: Pipe<I, M>, p2: Pipe<M, O>) -> Pipe<I, O>
where
    I: 'static,
    M: 'static,
    O: 'static,
{
    Pipe::new(move |input| p2.apply(p1.apply(input)))
}

/// Identity pipe that doesn't transform the sequence
pub fn identity<I>() -> Pipe<I, I>
where
    I: 'static,
{
    Pipe::new(|input| input)
}

/// Extension trait for pipes
pub trait PipeExt<I, O> {
    /// Compose this pipe with another pipe
    fn compose<P>(self, other: Pipe<O, P>) -> Pipe<I, P>
    where
        P: 'static;
}

impl<I, O> PipeExt<I, O> for Pipe<I, O>
where
    I: 'static,
    O: 'static,
{
    fn compose<P>(self, other: Pipe<O, P>) -> Pipe<I, P>
    where
        P: 'static,
    {
        compose(self, other)
    }
}

impl<'a, T, O> std::ops::Shr<Pipe<T, O>> for Sequence<'a, T> {
    type Output = Sequence<'a, O>;

    fn shr(self, pipe: Pipe<T, O>) -> Sequence<'a, O> {
        pipe.apply(self)
    }
}

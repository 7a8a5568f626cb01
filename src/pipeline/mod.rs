//! Pull-driven pipeline endpoints
//!
//! A [`Generator`] turns a readable stream into a lazy sequence of
//! typed values; a [`Consumer`] drains a sequence into a writable
//! stream. Together with [`Pipe`](crate::pipe::Pipe) stages they form
//! `source >> stage >> stage >> sink` pipelines: evaluation is driven
//! entirely by the sink, one element at a time, so an unread pipeline
//! never executes and no stage buffers beyond its own codec unit.

pub mod consumer;
pub mod generator;

pub use consumer::Consumer;
pub use generator::Generator;

//! Bundled [`LogSink`](crate::sink::LogSink) implementations.

pub mod vec;
pub mod writer;

pub use vec::VecSink;
pub use writer::WriterSink;

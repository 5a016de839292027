//! Bundled [`LogSource`](crate::source::LogSource) implementations.

pub mod lines;
pub mod stream;

pub use lines::LinesSource;
pub use stream::{BoxedLineStream, StreamSource};

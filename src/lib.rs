//! # LogWeave
//!
//! Streaming k-way merge of time-ordered log streams.
//!
//! LogWeave merges any number of independently sorted, line-oriented text
//! streams into one globally time-ordered output, reading each source
//! incrementally so memory stays bounded by the configured read-ahead window
//! rather than by input size. Every meaningful line starts with its
//! timestamp as `<NUMBER>`, e.g. `<1700000000>payload`.
//!
//! ## Key pieces
//!
//! - [`LogMerger`]: the merge coordinator — registers sources, selects the
//!   globally smallest head line, drives refills.
//! - [`LogSource`] / [`LogSink`]: collaborator contracts for inputs and the
//!   output destination.
//! - [`LinesSource`], [`StreamSource`], [`WriterSink`], [`VecSink`]: bundled
//!   adapters for buffered readers, line streams, writers and in-memory
//!   collection.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use logweave::{LinesSource, LogMerger, WriterSink};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut merger = LogMerger::default()
//!   .with_source("reg1.log", LinesSource::open("reg1.log").await?)
//!   .with_source("reg2.log", LinesSource::open("reg2.log").await?);
//!
//! let mut sink = WriterSink::create("merged.log").await?;
//! let emitted = merger.merge_into(&mut sink).await?;
//! println!("merged {emitted} lines");
//! # Ok(())
//! # }
//! ```

/// Merge engine configuration.
pub mod config;
/// Per-source read-ahead cursors.
pub mod cursor;
/// Error taxonomy.
pub mod error;
/// Core data carriers.
pub mod line;
/// The merge coordinator.
pub mod merger;
/// Output-sink contract.
pub mod sink;
/// Bundled sink implementations.
pub mod sinks;
/// Input-source contract.
pub mod source;
/// Bundled source implementations.
pub mod sources;
/// Timestamp keys and parsing.
pub mod timestamp;

pub use config::{DEFAULT_CHUNK_SIZE, MergeConfig};
pub use cursor::SourceCursor;
pub use error::MergeError;
pub use line::{Line, SourceId};
pub use merger::LogMerger;
pub use sink::LogSink;
pub use sinks::{VecSink, WriterSink};
pub use source::{LogSource, SourceChunk};
pub use sources::{BoxedLineStream, LinesSource, StreamSource};
pub use timestamp::TimestampKey;

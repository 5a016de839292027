//! # Merge Coordinator
//!
//! [`LogMerger`] drives the k-way merge: it owns one [`SourceCursor`] per
//! registered source, initializes every cursor with one concurrent refill,
//! then repeatedly emits the globally smallest head line until every source
//! is exhausted.
//!
//! ## Ordering
//!
//! Assuming every source is itself non-decreasing in its timestamp keys, the
//! emitted sequence is globally non-decreasing. Equal keys resolve to the
//! earliest-registered source, so output is reproducible for a fixed
//! registration order.
//!
//! ## Memory
//!
//! At most `chunk_size` lines are buffered per source, so a merge holds
//! `sources × chunk_size` lines regardless of input size — the classic
//! external k-way merge, adapted to streaming sources.

use async_stream::try_stream;
use futures::Stream;
use futures::future::try_join_all;
use tracing::{debug, info};

use crate::config::MergeConfig;
use crate::cursor::SourceCursor;
use crate::error::MergeError;
use crate::line::{Line, SourceId};
use crate::sink::LogSink;
use crate::source::LogSource;
use crate::timestamp::TimestampKey;

/// Coordinator for one streaming k-way merge.
///
/// Sources are merged by their head timestamps; registration order breaks
/// ties. A merger is single-use: it is consumed by [`into_stream`], or left
/// drained once [`merge_into`] returns.
///
/// [`into_stream`]: LogMerger::into_stream
/// [`merge_into`]: LogMerger::merge_into
pub struct LogMerger {
  cursors: Vec<SourceCursor>,
  config: MergeConfig,
  initialized: bool,
}

impl LogMerger {
  /// Creates a merger with no sources registered yet.
  #[must_use]
  pub fn new(config: MergeConfig) -> Self {
    Self {
      cursors: Vec::new(),
      config,
      initialized: false,
    }
  }

  /// Registers a source under `id`.
  ///
  /// Registration order is the tie-break order: when two heads carry equal
  /// timestamps, the earlier-registered source is emitted first.
  pub fn add_source<S>(&mut self, id: impl Into<SourceId>, source: S)
  where
    S: LogSource + 'static,
  {
    self
      .cursors
      .push(SourceCursor::new(id.into(), Box::new(source)));
  }

  /// Builder-style [`add_source`](LogMerger::add_source).
  #[must_use]
  pub fn with_source<S>(mut self, id: impl Into<SourceId>, source: S) -> Self
  where
    S: LogSource + 'static,
  {
    self.add_source(id, source);
    self
  }

  /// Number of registered sources.
  #[must_use]
  pub fn source_count(&self) -> usize {
    self.cursors.len()
  }

  /// Merges every registered source into `sink`, returning the number of
  /// lines emitted.
  ///
  /// Lines are written one at a time in non-decreasing timestamp order, each
  /// followed by a single newline. The sink is neither flushed nor closed.
  /// An empty source set completes immediately with `Ok(0)`.
  ///
  /// # Errors
  ///
  /// Any [`MergeError`] aborts the merge; lines already written stay
  /// written.
  pub async fn merge_into<S>(&mut self, sink: &mut S) -> Result<u64, MergeError>
  where
    S: LogSink + ?Sized,
  {
    self.initialize().await?;
    let mut emitted = 0u64;
    while let Some(line) = self.next_line().await? {
      sink.write_line(&line).await.map_err(MergeError::SinkFault)?;
      emitted += 1;
    }
    info!(lines = emitted, sources = self.cursors.len(), "merge complete");
    Ok(emitted)
  }

  /// Consumes the merger and yields merged lines as an async stream.
  ///
  /// Same sequence [`merge_into`](LogMerger::merge_into) would emit; the
  /// first poll performs initialization, and a yielded error ends the
  /// stream.
  pub fn into_stream(mut self) -> impl Stream<Item = Result<Line, MergeError>> + Send {
    try_stream! {
      self.initialize().await?;
      while let Some(line) = self.next_line().await? {
        yield line;
      }
    }
  }

  /// One refill per cursor, concurrently, exactly once per merger.
  ///
  /// Sources are independent, so completion order is irrelevant; each refill
  /// writes to a disjoint cursor.
  async fn initialize(&mut self) -> Result<(), MergeError> {
    if self.initialized {
      return Ok(());
    }
    let chunk_size = self.config.chunk_size();
    debug!(
      sources = self.cursors.len(),
      chunk_size, "initializing merge cursors"
    );
    try_join_all(
      self
        .cursors
        .iter_mut()
        .map(|cursor| cursor.refill(chunk_size)),
    )
    .await?;
    self.initialized = true;
    Ok(())
  }

  /// Pops the globally smallest head line, refilling drained cursors first.
  ///
  /// Returns `Ok(None)` once every cursor is drained and exhausted.
  async fn next_line(&mut self) -> Result<Option<Line>, MergeError> {
    let chunk_size = self.config.chunk_size();

    // Only the cursor drained by the previous pop can need a refill here,
    // so refills stay sequential after initialization. Refilling before the
    // pop is handed out means a fault can never lose an already-emitted
    // line.
    for cursor in &mut self.cursors {
      if cursor.needs_refill() {
        cursor.refill(chunk_size).await?;
      }
    }

    // Strict `<` keeps the earliest-registered source on equal keys.
    let mut best: Option<(usize, TimestampKey)> = None;
    for (index, cursor) in self.cursors.iter().enumerate() {
      if let Some(head) = cursor.peek_head() {
        if best.map_or(true, |(_, key)| head.key < key) {
          best = Some((index, head.key));
        }
      }
    }

    Ok(best.and_then(|(index, _)| self.cursors[index].pop_head()))
  }
}

impl Default for LogMerger {
  fn default() -> Self {
    Self::new(MergeConfig::default())
  }
}

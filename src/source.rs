//! Input-source contract for the merge engine.

use std::io;

use async_trait::async_trait;

/// One batch of lines handed back by a single read step.
#[derive(Debug)]
pub struct SourceChunk {
  /// Up to the requested number of trimmed, non-blank lines in source order.
  pub lines: Vec<String>,
  /// True when the source signalled end-of-source during this read; no
  /// further lines will ever arrive.
  pub exhausted: bool,
}

/// A line-oriented input stream the merge engine can read from.
///
/// The engine drives a source exclusively through [`read_chunk`]: one
/// request, one response of up to `max_lines` lines plus an explicit
/// end-of-source marker. Implementations must hand back trimmed lines and
/// drop blank ones — the engine never sees them. A fault aborts the whole
/// merge, so implementations should retry internally anything they consider
/// transient.
///
/// [`read_chunk`]: LogSource::read_chunk
#[async_trait]
pub trait LogSource: Send {
  /// Reads up to `max_lines` non-blank lines, or fewer when the source ends.
  async fn read_chunk(&mut self, max_lines: usize) -> io::Result<SourceChunk>;
}

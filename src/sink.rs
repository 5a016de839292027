//! Output-sink contract for the merge engine.

use std::io;

use async_trait::async_trait;

use crate::line::Line;

/// Destination for merged lines.
///
/// The engine writes lines strictly one at a time, in merge order, and never
/// closes the sink — flushing and shutdown belong to the caller once the
/// merge returns.
#[async_trait]
pub trait LogSink: Send {
  /// Appends the line's content followed by a single newline.
  async fn write_line(&mut self, line: &Line) -> io::Result<()>;
}

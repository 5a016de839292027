//! Per-source read-ahead cursor.
//!
//! A [`SourceCursor`] owns one source's buffered window of parsed lines and
//! the refill protocol that keeps it topped up. The coordinator only ever
//! looks at the head of the window, so after every successful refill the
//! head is that source's next-smallest unread timestamp.

use std::collections::VecDeque;

use tracing::trace;

use crate::error::MergeError;
use crate::line::{Line, SourceId};
use crate::source::LogSource;
use crate::timestamp::TimestampKey;

/// Read-ahead buffer and refill state for exactly one input source.
pub struct SourceCursor {
  id: SourceId,
  source: Box<dyn LogSource>,
  buffer: VecDeque<Line>,
  exhausted: bool,
}

impl SourceCursor {
  /// Creates a cursor with an empty buffer; the coordinator performs the
  /// first refill before the merge loop starts.
  pub fn new(id: SourceId, source: Box<dyn LogSource>) -> Self {
    Self {
      id,
      source,
      buffer: VecDeque::new(),
      exhausted: false,
    }
  }

  /// The identifier this cursor was registered under.
  pub fn id(&self) -> &SourceId {
    &self.id
  }

  /// Oldest buffered line, without removing it.
  pub fn peek_head(&self) -> Option<&Line> {
    self.buffer.front()
  }

  /// Removes and returns the oldest buffered line.
  pub fn pop_head(&mut self) -> Option<Line> {
    self.buffer.pop_front()
  }

  /// True while the buffer holds at least one line.
  pub fn is_active(&self) -> bool {
    !self.buffer.is_empty()
  }

  /// True once the source has signalled that no further lines will arrive.
  pub fn is_exhausted(&self) -> bool {
    self.exhausted
  }

  /// True when the buffer drained but the source may still have lines.
  pub fn needs_refill(&self) -> bool {
    self.buffer.is_empty() && !self.exhausted
  }

  /// Number of lines currently buffered.
  pub fn buffered(&self) -> usize {
    self.buffer.len()
  }

  /// Performs one read step against the underlying source.
  ///
  /// Appends up to `chunk_size` parsed lines to the buffer and returns how
  /// many arrived. An exhausted cursor is never re-read: the call is a no-op
  /// returning zero. On any failure nothing from the failed read is kept.
  ///
  /// # Errors
  ///
  /// [`MergeError::SourceFault`] when the source reports a read fault,
  /// [`MergeError::MalformedTimestamp`] when a line in the chunk has no
  /// parsable leading timestamp.
  pub async fn refill(&mut self, chunk_size: usize) -> Result<usize, MergeError> {
    if self.exhausted {
      return Ok(0);
    }

    let chunk = self
      .source
      .read_chunk(chunk_size)
      .await
      .map_err(|fault| MergeError::SourceFault {
        source_id: self.id.clone(),
        fault,
      })?;

    let mut parsed = Vec::with_capacity(chunk.lines.len());
    for content in chunk.lines {
      let Some(key) = TimestampKey::parse(&content) else {
        return Err(MergeError::MalformedTimestamp {
          source_id: self.id.clone(),
          line: content,
        });
      };
      parsed.push(Line {
        source: self.id.clone(),
        content,
        key,
      });
    }

    let appended = parsed.len();
    self.buffer.extend(parsed);
    self.exhausted = chunk.exhausted;
    trace!(
      source = %self.id,
      appended,
      buffered = self.buffer.len(),
      exhausted = self.exhausted,
      "refilled cursor"
    );
    Ok(appended)
  }
}

#[cfg(test)]
mod tests {
  use std::io;

  use async_trait::async_trait;

  use super::*;
  use crate::source::SourceChunk;

  /// Plays back a fixed list of read results.
  struct ScriptedSource {
    steps: Vec<io::Result<SourceChunk>>,
  }

  #[async_trait]
  impl LogSource for ScriptedSource {
    async fn read_chunk(&mut self, _max_lines: usize) -> io::Result<SourceChunk> {
      if self.steps.is_empty() {
        return Ok(SourceChunk {
          lines: Vec::new(),
          exhausted: true,
        });
      }
      self.steps.remove(0)
    }
  }

  fn cursor_with(steps: Vec<io::Result<SourceChunk>>) -> SourceCursor {
    SourceCursor::new(
      SourceId::from("scripted"),
      Box::new(ScriptedSource { steps }),
    )
  }

  #[tokio::test]
  async fn refill_buffers_parsed_lines_in_order() {
    let mut cursor = cursor_with(vec![Ok(SourceChunk {
      lines: vec!["<1>a".to_string(), "<2>b".to_string()],
      exhausted: false,
    })]);

    assert_eq!(cursor.refill(2).await.unwrap(), 2);
    assert!(cursor.is_active());
    assert!(!cursor.is_exhausted());
    assert_eq!(cursor.buffered(), 2);
    assert_eq!(cursor.peek_head().unwrap().key, TimestampKey::new(1));
    assert_eq!(cursor.pop_head().unwrap().content, "<1>a");
    assert_eq!(cursor.pop_head().unwrap().content, "<2>b");
    assert!(cursor.needs_refill());
  }

  #[tokio::test]
  async fn exhausted_cursor_is_never_reread() {
    let mut cursor = cursor_with(vec![Ok(SourceChunk {
      lines: vec!["<1>only".to_string()],
      exhausted: true,
    })]);

    assert_eq!(cursor.refill(10).await.unwrap(), 1);
    assert!(cursor.is_exhausted());
    cursor.pop_head();

    // The scripted follow-up step must never be reached.
    assert_eq!(cursor.refill(10).await.unwrap(), 0);
    assert!(!cursor.needs_refill());
    assert!(!cursor.is_active());
  }

  #[tokio::test]
  async fn read_fault_keeps_the_buffer_empty() {
    let mut cursor = cursor_with(vec![Err(io::Error::new(
      io::ErrorKind::BrokenPipe,
      "disk gone",
    ))]);

    let err = cursor.refill(5).await.unwrap_err();
    match err {
      MergeError::SourceFault { source_id, .. } => {
        assert_eq!(source_id.as_str(), "scripted");
      }
      other => panic!("unexpected error: {other}"),
    }
    assert!(!cursor.is_active());
  }

  #[tokio::test]
  async fn malformed_line_aborts_the_refill() {
    let mut cursor = cursor_with(vec![Ok(SourceChunk {
      lines: vec!["<1>ok".to_string(), "bogus line".to_string()],
      exhausted: false,
    })]);

    let err = cursor.refill(5).await.unwrap_err();
    match err {
      MergeError::MalformedTimestamp { source_id, line } => {
        assert_eq!(source_id.as_str(), "scripted");
        assert_eq!(line, "bogus line");
      }
      other => panic!("unexpected error: {other}"),
    }
    // Nothing from the failed read is kept, not even the parsable prefix.
    assert!(!cursor.is_active());
  }
}

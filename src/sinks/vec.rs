use std::io;

use async_trait::async_trait;

use crate::line::Line;
use crate::sink::LogSink;

/// In-memory [`LogSink`] collecting merged lines; the test workhorse, also
/// handy for small merges consumed programmatically.
#[derive(Debug, Default)]
pub struct VecSink {
  lines: Vec<Line>,
}

impl VecSink {
  /// Creates an empty sink.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates an empty sink with room for `capacity` lines.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      lines: Vec::with_capacity(capacity),
    }
  }

  /// Collected lines, in emission order.
  pub fn lines(&self) -> &[Line] {
    &self.lines
  }

  /// Collected line contents, in emission order.
  pub fn contents(&self) -> Vec<String> {
    self.lines.iter().map(|line| line.content.clone()).collect()
  }

  /// Consumes the sink and returns the collected lines.
  #[must_use]
  pub fn into_vec(self) -> Vec<Line> {
    self.lines
  }
}

#[async_trait]
impl LogSink for VecSink {
  async fn write_line(&mut self, line: &Line) -> io::Result<()> {
    self.lines.push(line.clone());
    Ok(())
  }
}

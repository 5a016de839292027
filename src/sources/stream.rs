use std::io;
use std::pin::Pin;

use async_trait::async_trait;
use futures::{Stream, StreamExt};

use crate::source::{LogSource, SourceChunk};

/// Boxed line stream, for heterogeneous or fixture sources.
pub type BoxedLineStream = Pin<Box<dyn Stream<Item = io::Result<String>> + Send>>;

/// Push-style [`LogSource`] over any stream of lines.
///
/// Fits sources that arrive as events rather than reads: channel receivers,
/// `tokio-stream` reader wrappers, or in-memory fixtures. Like
/// [`LinesSource`](crate::sources::LinesSource) it trims lines and drops
/// blank ones.
pub struct StreamSource<S> {
  inner: S,
  done: bool,
}

impl<S> StreamSource<S>
where
  S: Stream<Item = io::Result<String>> + Unpin + Send,
{
  /// Wraps a stream of lines.
  pub fn new(inner: S) -> Self {
    Self { inner, done: false }
  }
}

impl StreamSource<BoxedLineStream> {
  /// Builds a source over a fixed set of lines. Mostly useful in tests.
  pub fn from_lines<I>(lines: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<String>,
  {
    let lines: Vec<io::Result<String>> = lines.into_iter().map(|line| Ok(line.into())).collect();
    Self::new(Box::pin(futures::stream::iter(lines)) as BoxedLineStream)
  }
}

#[async_trait]
impl<S> LogSource for StreamSource<S>
where
  S: Stream<Item = io::Result<String>> + Unpin + Send,
{
  async fn read_chunk(&mut self, max_lines: usize) -> io::Result<SourceChunk> {
    if self.done {
      return Ok(SourceChunk {
        lines: Vec::new(),
        exhausted: true,
      });
    }

    let mut lines = Vec::new();
    while lines.len() < max_lines {
      match self.inner.next().await {
        Some(Ok(raw)) => {
          let trimmed = raw.trim();
          if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
          }
        }
        Some(Err(fault)) => return Err(fault),
        None => {
          self.done = true;
          return Ok(SourceChunk {
            lines,
            exhausted: true,
          });
        }
      }
    }
    Ok(SourceChunk {
      lines,
      exhausted: false,
    })
  }
}

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use crate::source::{LogSource, SourceChunk};

/// Pull-based [`LogSource`] over any buffered async reader.
///
/// Lines are trimmed and blank lines skipped before counting towards the
/// chunk, so a short chunk always means end-of-source.
pub struct LinesSource<R> {
  lines: Lines<R>,
}

impl<R> LinesSource<R>
where
  R: AsyncBufRead + Unpin + Send,
{
  /// Wraps an already-open buffered reader.
  pub fn new(reader: R) -> Self {
    Self {
      lines: reader.lines(),
    }
  }
}

impl LinesSource<BufReader<File>> {
  /// Opens a log file for reading.
  pub async fn open(path: impl AsRef<Path>) -> io::Result<Self> {
    let file = File::open(path).await?;
    Ok(Self::new(BufReader::new(file)))
  }
}

#[async_trait]
impl<R> LogSource for LinesSource<R>
where
  R: AsyncBufRead + Unpin + Send,
{
  async fn read_chunk(&mut self, max_lines: usize) -> io::Result<SourceChunk> {
    let mut lines = Vec::new();
    while lines.len() < max_lines {
      match self.lines.next_line().await? {
        Some(raw) => {
          let trimmed = raw.trim();
          if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
          }
        }
        None => {
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

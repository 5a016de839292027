use std::io;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::line::Line;
use crate::sink::LogSink;

/// [`LogSink`] appending to any async writer.
pub struct WriterSink<W> {
  writer: W,
}

impl<W> WriterSink<W>
where
  W: AsyncWrite + Unpin + Send,
{
  /// Wraps an already-open writer.
  pub fn new(writer: W) -> Self {
    Self { writer }
  }

  /// Flushes buffered bytes through to the destination.
  pub async fn flush(&mut self) -> io::Result<()> {
    self.writer.flush().await
  }

  /// Returns the underlying writer.
  pub fn into_inner(self) -> W {
    self.writer
  }
}

impl WriterSink<File> {
  /// Creates (or truncates) the destination file.
  pub async fn create(path: impl AsRef<Path>) -> io::Result<Self> {
    Ok(Self::new(File::create(path).await?))
  }
}

#[async_trait]
impl<W> LogSink for WriterSink<W>
where
  W: AsyncWrite + Unpin + Send,
{
  async fn write_line(&mut self, line: &Line) -> io::Result<()> {
    self.writer.write_all(line.content.as_bytes()).await?;
    self.writer.write_all(b"\n").await
  }
}

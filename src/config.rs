//! Merge engine configuration.

use crate::error::MergeError;

/// Read-ahead window used when the caller does not pick one.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Validated configuration for a [`LogMerger`].
///
/// `chunk_size` caps how many lines each source buffers ahead of the merge,
/// bounding memory to `sources × chunk_size` lines regardless of input size.
/// A chunk size of 1 degenerates to single-line read-ahead; batching never
/// changes the merged output, only how often sources are read.
///
/// [`LogMerger`]: crate::merger::LogMerger
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MergeConfig {
  chunk_size: usize,
}

impl MergeConfig {
  /// Creates a configuration with the given per-source read-ahead window.
  ///
  /// # Errors
  ///
  /// Returns [`MergeError::InvalidChunkSize`] when `chunk_size` is zero.
  pub fn new(chunk_size: usize) -> Result<Self, MergeError> {
    if chunk_size == 0 {
      return Err(MergeError::InvalidChunkSize);
    }
    Ok(Self { chunk_size })
  }

  /// Maximum number of lines fetched from a source in one refill.
  pub fn chunk_size(&self) -> usize {
    self.chunk_size
  }
}

impl Default for MergeConfig {
  fn default() -> Self {
    Self {
      chunk_size: DEFAULT_CHUNK_SIZE,
    }
  }
}

//! Error taxonomy for the merge engine.

use std::io;

use thiserror::Error;

use crate::line::SourceId;

/// Errors that abort a merge.
///
/// None of these are retried by the engine: a fault from any collaborator
/// fails the merge as a whole and the caller decides how to report it. Lines
/// already written to the sink stay written — there is no rollback.
#[derive(Debug, Error)]
pub enum MergeError {
  /// The underlying source reported a read fault during a refill.
  #[error("source `{source_id}` failed while reading: {fault}")]
  SourceFault {
    /// The source whose read failed.
    source_id: SourceId,
    /// The underlying I/O fault.
    #[source]
    fault: io::Error,
  },

  /// A line did not start with a parsable `<NUMBER>` timestamp token.
  ///
  /// Surfaced at refill time so a corrupt line names its source instead of
  /// silently starving it (the unparsable key would otherwise never win a
  /// minimum-selection round).
  #[error("source `{source_id}` produced a line without a `<timestamp>` prefix: {line:?}")]
  MalformedTimestamp {
    /// The source the line came from.
    source_id: SourceId,
    /// The offending line, verbatim.
    line: String,
  },

  /// The output sink rejected a write.
  #[error("sink write failed: {0}")]
  SinkFault(#[source] io::Error),

  /// A [`MergeConfig`] was built with a zero chunk size.
  ///
  /// [`MergeConfig`]: crate::config::MergeConfig
  #[error("chunk size must be at least 1")]
  InvalidChunkSize,
}

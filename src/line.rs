//! Core data carriers: [`SourceId`] and [`Line`].

use std::fmt;

use crate::timestamp::TimestampKey;

/// Opaque, stable identifier for one input source.
///
/// Typically a file path, but the merge engine never interprets it — it is
/// only used for labeling, error attribution and registration order.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SourceId(String);

impl SourceId {
  /// Creates an identifier from anything string-like.
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  /// Returns the identifier as a string slice.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for SourceId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<&str> for SourceId {
  fn from(id: &str) -> Self {
    Self(id.to_string())
  }
}

impl From<String> for SourceId {
  fn from(id: String) -> Self {
    Self(id)
  }
}

/// One mergeable unit of text: a trimmed line, the source it came from and
/// the timestamp key parsed from its leading token.
///
/// Produced by a cursor refill, consumed exactly once by the coordinator,
/// then handed to the sink. `content` carries no trailing newline.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line {
  /// The source this line was read from.
  pub source: SourceId,
  /// Raw line content without the trailing newline.
  pub content: String,
  /// Ordering key parsed from the leading `<NUMBER>` token.
  pub key: TimestampKey,
}

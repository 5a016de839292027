//! Timestamp keys parsed from the leading `<NUMBER>` token of a log line.
//!
//! Every meaningful line starts with its timestamp enclosed in angle
//! brackets, e.g. `<1700000000>payload`. The key is an opaque ordinal: it is
//! never interpreted as calendar time, only compared.

use std::fmt;

/// Totally ordered merge key extracted from a line's leading timestamp token.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimestampKey(u64);

impl TimestampKey {
  /// Creates a key from a raw timestamp value.
  #[inline]
  pub const fn new(value: u64) -> Self {
    Self(value)
  }

  /// Returns the raw timestamp value.
  #[inline]
  pub const fn value(self) -> u64 {
    self.0
  }

  /// Parses the key from a raw line.
  ///
  /// Takes the substring before the first `>`, strips one leading `<` if
  /// present and reads the rest as a decimal number. Returns `None` when the
  /// delimiter is missing or the token is not numeric; the caller decides how
  /// to surface that (see [`MergeError::MalformedTimestamp`]).
  ///
  /// [`MergeError::MalformedTimestamp`]: crate::error::MergeError::MalformedTimestamp
  pub fn parse(line: &str) -> Option<Self> {
    let (token, _) = line.split_once('>')?;
    let digits = token.strip_prefix('<').unwrap_or(token);
    digits.parse::<u64>().ok().map(Self)
  }
}

impl fmt::Display for TimestampKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

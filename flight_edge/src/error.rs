//! Defines the error type for this crate.

use thiserror::Error;

/// The error type for this crate.
///
/// Nothing on [crate::Edge] itself can fail. Errors only come from decoding
/// schedule times and from decoding or encoding edges.
#[derive(Error, Debug)]
pub enum Error {
  /// The value is not a 24-hour `HHMM` time, e.g. `2460` or `-5`.
  #[error("{0} is not a valid 24-hour time (expected HHMM in 0000..=2359).")]
  InvalidClockTime(i32),

  /// A decoded edge stores a flight record under another flight's key.
  #[error("Flight \"{flight}\" is stored under key \"{key}\".")]
  FlightKeyMismatch { key: String, flight: String },

  /// bincode failed to encode or decode an edge.
  #[error("Failed to encode or decode edge: {0}")]
  Encoding(#[from] bincode::Error),
}

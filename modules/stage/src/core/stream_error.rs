//! Stream error definitions.


use alloc::string::String;

use super::ProtocolViolation;

/// Errors produced by stage operations.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StreamError {
  /// The stage has not been started.
  #[error("stage not started")]
  NotStarted,
  /// The stage has already been started.
  #[error("stage already started")]
  AlreadyStarted,
  /// The stage is not running.
  #[error("stage is not running")]
  NotRunning,
  /// Demand request is invalid.
  #[error("invalid demand request")]
  InvalidDemand,
  /// The inbound event queue reached capacity.
  #[error("event queue is full")]
  EventQueueFull,
  /// A port was driven through an illegal transition.
  #[error("protocol violation on port `{port}`: {violation}")]
  ProtocolViolation {
    /// Name of the port involved.
    port:      &'static str,
    /// The illegal transition.
    violation: ProtocolViolation,
  },
  /// The requested digest algorithm is not supported.
  #[error("unsupported digest algorithm `{0}`")]
  UnsupportedAlgorithm(String),
  /// The stream completed before producing an element.
  #[error("stream completed without an element")]
  EmptyStream,
  /// No progress is possible without external input.
  #[error("operation would block")]
  WouldBlock,
  /// The stream failed with the provided reason.
  #[error("stream failed: {0}")]
  Failed(String),
}

impl StreamError {
  /// Creates a [`StreamError::Failed`] from any displayable reason.
  #[must_use]
  pub fn failed(reason: impl Into<String>) -> Self {
    Self::Failed(reason.into())
  }

  /// Returns `true` when the error reports a protocol violation.
  #[must_use]
  pub const fn is_protocol_violation(&self) -> bool {
    matches!(self, Self::ProtocolViolation { .. })
  }
}

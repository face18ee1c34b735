use super::StreamError;

/// Reason attached to a cancellation travelling upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancellationCause {
  /// Downstream does not need further elements.
  NoMoreElementsNeeded,
  /// The stage completed and releases its upstream.
  StageWasCompleted,
  /// The stage failed with the carried error.
  Failed(StreamError),
}

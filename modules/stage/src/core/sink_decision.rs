/// Reaction of a downstream sink to a received element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkDecision {
  /// Keep receiving while demand remains.
  Continue,
  /// Stop the stream; the stage is cancelled.
  Complete,
}

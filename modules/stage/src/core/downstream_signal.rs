
use super::StreamError;

/// Signal a stage sends to its downstream neighbour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownstreamSignal<Out> {
  /// One element answering one unit of demand.
  Push(Out),
  /// The stream completed normally.
  Complete,
  /// The stream failed.
  Fail(StreamError),
}

impl<Out> DownstreamSignal<Out> {
  /// Returns `true` for completion and failure signals.
  #[must_use]
  pub const fn is_terminal(&self) -> bool {
    matches!(self, Self::Complete | Self::Fail(_))
  }
}

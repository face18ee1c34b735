use super::CancellationCause;

/// Signal a stage sends to its upstream neighbour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamSignal {
  /// Request exactly one element.
  Request,
  /// Stop producing; no further requests follow.
  Cancel(CancellationCause),
}

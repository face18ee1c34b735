/// Demand/data state of an inlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InletState {
  /// No demand issued upstream and nothing buffered.
  Idle,
  /// Demand issued upstream, no element delivered yet.
  AwaitingData,
  /// One delivered element waits to be grabbed.
  HasData,
  /// Upstream finished or failed, or the stage cancelled it.
  Closed,
}

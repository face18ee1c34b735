/// Demand state of an outlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutletState {
  /// Downstream has not requested an element.
  Idle,
  /// Downstream requested exactly one element.
  Demanded,
  /// Downstream cancelled, or the stage completed or failed.
  Closed,
}

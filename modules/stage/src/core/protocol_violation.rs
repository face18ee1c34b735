//! Protocol violation definitions.

/// Illegal port transition attempted by a stage or one of its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolViolation {
  /// `pull` was called while a request was already pending or data was buffered.
  #[error("request while a previous request is pending")]
  RequestWhilePending,
  /// `pull` was called on a closed inlet.
  #[error("request on a closed inlet")]
  RequestOnClosed,
  /// `grab` was called while no element was buffered.
  #[error("grab without a buffered element")]
  GrabWithoutData,
  /// `push` was called while the outlet had no demand.
  #[error("emit without downstream demand")]
  EmitWithoutDemand,
  /// `push` was called on a closed outlet.
  #[error("emit on a closed outlet")]
  EmitOnClosed,
  /// `push` was called while deferred emissions were still queued.
  #[error("push while deferred emissions are pending")]
  PushWhileEmitting,
  /// Upstream delivered an element that was never requested.
  #[error("element delivered without a pending request")]
  DeliveryWithoutRequest,
  /// Upstream delivered an element after the inlet closed.
  #[error("element delivered to a closed inlet")]
  DeliveryOnClosed,
  /// Downstream signalled demand while previous demand was still open.
  #[error("demand while previous demand is still open")]
  DemandWhileDemanded,
  /// Downstream signalled demand after the outlet closed.
  #[error("demand on a closed outlet")]
  DemandOnClosed,
}

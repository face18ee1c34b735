/// Neighbour event injected by the fuzz runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzAction {
  /// Downstream pulled one element.
  Pull,
  /// Upstream answered a request with the element derived from the seed value.
  Push(u32),
  /// Upstream finished.
  Finish,
  /// Upstream failed.
  Fail,
  /// Downstream cancelled.
  Cancel,
}

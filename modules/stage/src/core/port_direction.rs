/// Side of a stage a port belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortDirection {
  /// Port receiving elements from upstream.
  Input,
  /// Port emitting elements to downstream.
  Output,
}

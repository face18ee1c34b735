/// Outcome of one drive cycle of a [`StageRunner`](super::StageRunner) or [`StageDriver`](super::StageDriver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveOutcome {
  /// At least one event was dispatched or signal forwarded.
  Progressed,
  /// Nothing could be done without external input.
  Idle,
}

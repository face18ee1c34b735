//! Stream state definitions.

/// Lifecycle state of a stage execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
  /// Stage has not started yet.
  Idle,
  /// Stage is running.
  Running,
  /// Stage requested completion and still owes queued emissions downstream.
  Finishing,
  /// Stage completed successfully.
  Completed,
  /// Stage failed.
  Failed,
  /// Stage was cancelled.
  Cancelled,
}

impl StreamState {
  /// Returns `true` once no further transitions can happen.
  #[must_use]
  pub const fn is_terminal(&self) -> bool {
    matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
  }

  /// Returns `true` while the stage accepts events.
  #[must_use]
  pub const fn is_active(&self) -> bool {
    matches!(self, Self::Running | Self::Finishing)
  }
}

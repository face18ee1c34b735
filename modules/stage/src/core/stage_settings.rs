//! Stage runner configuration.


use alloc::string::String;

/// Configuration for [`StageRunner`](super::StageRunner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSettings {
  name:                   String,
  max_dispatch_per_drive: usize,
  event_queue_capacity:   usize,
}

impl StageSettings {
  /// Creates a new configuration with defaults.
  #[must_use]
  pub fn new() -> Self {
    Self { name: String::from("stage"), max_dispatch_per_drive: 64, event_queue_capacity: 16 }
  }

  /// Returns the stage name used in log records.
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Returns the maximum number of events dispatched by one drive cycle.
  #[must_use]
  pub const fn max_dispatch_per_drive(&self) -> usize {
    self.max_dispatch_per_drive
  }

  /// Returns the capacity of the inbound event queue.
  #[must_use]
  pub const fn event_queue_capacity(&self) -> usize {
    self.event_queue_capacity
  }

  /// Updates the stage name.
  #[must_use]
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }

  /// Updates the dispatch budget of a drive cycle. Zero is raised to one.
  #[must_use]
  pub fn with_max_dispatch_per_drive(mut self, max_dispatch_per_drive: usize) -> Self {
    self.max_dispatch_per_drive = max_dispatch_per_drive.max(1);
    self
  }

  /// Updates the inbound event queue capacity. Zero is raised to one.
  #[must_use]
  pub fn with_event_queue_capacity(mut self, event_queue_capacity: usize) -> Self {
    self.event_queue_capacity = event_queue_capacity.max(1);
    self
  }
}

impl Default for StageSettings {
  fn default() -> Self {
    Self::new()
  }
}

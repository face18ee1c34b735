use super::{DemandTracker, SinkDecision, StreamError};

/// Consumer attached to the outlet of a stage.
pub trait DownstreamSink<T> {
  /// Announces initial demand.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError`] when the demand cannot be registered.
  fn on_start(&mut self, demand: &mut DemandTracker) -> Result<(), StreamError>;

  /// Receives one element and may add further demand.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError`] to cancel the stream with a failure.
  fn on_push(&mut self, element: T, demand: &mut DemandTracker) -> Result<SinkDecision, StreamError>;

  /// Called when the stage completed.
  fn on_complete(&mut self);

  /// Called when the stage failed.
  fn on_error(&mut self, error: StreamError);
}

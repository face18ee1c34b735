//! Sink completing with the first element.


use super::{DemandTracker, DownstreamSink, SinkDecision, StreamCompletion, StreamError};

/// Sink that requests one element and completes with it.
pub struct HeadSink<T> {
  completion: StreamCompletion<T>,
}

impl<T> HeadSink<T> {
  /// Creates a sink reporting into a fresh completion handle.
  #[must_use]
  pub fn new() -> Self {
    Self { completion: StreamCompletion::new() }
  }

  /// Returns a handle observing the terminal result.
  #[must_use]
  pub fn completion(&self) -> StreamCompletion<T> {
    self.completion.clone()
  }
}

impl<T> Default for HeadSink<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> DownstreamSink<T> for HeadSink<T> {
  fn on_start(&mut self, demand: &mut DemandTracker) -> Result<(), StreamError> {
    demand.request(1)?;
    Ok(())
  }

  fn on_push(&mut self, element: T, _demand: &mut DemandTracker) -> Result<SinkDecision, StreamError> {
    self.completion.complete(Ok(element));
    Ok(SinkDecision::Complete)
  }

  fn on_complete(&mut self) {
    self.completion.complete(Err(StreamError::EmptyStream));
  }

  fn on_error(&mut self, error: StreamError) {
    self.completion.complete(Err(error));
  }
}

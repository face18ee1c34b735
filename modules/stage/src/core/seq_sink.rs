use alloc::vec::Vec;

use super::{DemandTracker, DownstreamSink, SinkDecision, StreamCompletion, StreamError};

/// Sink collecting every element until the stage completes.
pub struct SeqSink<T> {
  elements:   Vec<T>,
  completion: StreamCompletion<Vec<T>>,
}

impl<T> SeqSink<T> {
  /// Creates a sink reporting into a fresh completion handle.
  #[must_use]
  pub fn new() -> Self {
    Self { elements: Vec::new(), completion: StreamCompletion::new() }
  }

  /// Returns a handle observing the collected elements.
  #[must_use]
  pub fn completion(&self) -> StreamCompletion<Vec<T>> {
    self.completion.clone()
  }
}

impl<T> Default for SeqSink<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> DownstreamSink<T> for SeqSink<T> {
  fn on_start(&mut self, demand: &mut DemandTracker) -> Result<(), StreamError> {
    demand.request(1)?;
    Ok(())
  }

  fn on_push(&mut self, element: T, demand: &mut DemandTracker) -> Result<SinkDecision, StreamError> {
    self.elements.push(element);
    demand.request(1)?;
    Ok(SinkDecision::Continue)
  }

  fn on_complete(&mut self) {
    self.completion.complete(Ok(core::mem::take(&mut self.elements)));
  }

  fn on_error(&mut self, error: StreamError) {
    self.elements.clear();
    self.completion.complete(Err(error));
  }
}

//! Source replaying a fixed sequence of elements.


use alloc::collections::VecDeque;

use super::{CancellationCause, SourceSignal, StreamError, UpstreamSource};

/// Source answering requests from a finite list, optionally ending in a failure.
#[derive(Debug, Clone)]
pub struct SeqSource<T> {
  elements:  VecDeque<T>,
  failure:   Option<StreamError>,
  requests:  usize,
  cancelled: Option<CancellationCause>,
}

impl<T> SeqSource<T> {
  /// Creates a source that emits the provided elements then finishes.
  #[must_use]
  pub fn new(elements: impl IntoIterator<Item = T>) -> Self {
    Self { elements: elements.into_iter().collect(), failure: None, requests: 0, cancelled: None }
  }

  /// Fails with `error` instead of finishing once the elements are exhausted.
  #[must_use]
  pub fn with_failure(mut self, error: StreamError) -> Self {
    self.failure = Some(error);
    self
  }

  /// Returns how many requests were answered.
  #[must_use]
  pub const fn requests(&self) -> usize {
    self.requests
  }

  /// Returns the number of elements not yet emitted.
  #[must_use]
  pub fn remaining(&self) -> usize {
    self.elements.len()
  }

  /// Returns the cancellation cause, if the stage cancelled this source.
  #[must_use]
  pub const fn cancellation(&self) -> Option<&CancellationCause> {
    self.cancelled.as_ref()
  }
}

impl<T> UpstreamSource<T> for SeqSource<T> {
  fn pull(&mut self) -> SourceSignal<T> {
    self.requests += 1;
    if let Some(element) = self.elements.pop_front() {
      return SourceSignal::Element(element);
    }
    match self.failure.take() {
      | Some(error) => SourceSignal::Failed(error),
      | None => SourceSignal::Finished,
    }
  }

  fn on_cancel(&mut self, cause: CancellationCause) {
    self.cancelled = Some(cause);
  }
}

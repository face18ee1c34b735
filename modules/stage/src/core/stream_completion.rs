//! Terminal result holder shared between a sink and its caller.


use alloc::sync::Arc;

use spin::Mutex;

use super::{Completion, StreamError};

struct CompletionState<T> {
  result: Option<Result<T, StreamError>>,
}

impl<T> CompletionState<T> {
  const fn new() -> Self {
    Self { result: None }
  }
}

/// Handle used to observe the single terminal result of a stream.
pub struct StreamCompletion<T> {
  inner: Arc<Mutex<CompletionState<T>>>,
}

impl<T> Clone for StreamCompletion<T> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<T> StreamCompletion<T> {
  /// Creates a new completion handle.
  #[must_use]
  pub fn new() -> Self {
    Self { inner: Arc::new(Mutex::new(CompletionState::new())) }
  }

  /// Polls the completion state.
  #[must_use]
  pub fn poll(&self) -> Completion<T>
  where
    T: Clone, {
    let guard = self.inner.lock();
    match guard.result.clone() {
      | Some(result) => Completion::Ready(result),
      | None => Completion::Pending,
    }
  }

  /// Returns `true` once a terminal result has been recorded.
  #[must_use]
  pub fn is_ready(&self) -> bool {
    self.inner.lock().result.is_some()
  }

  /// Attempts to take the completion result.
  #[must_use]
  pub fn try_take(&self) -> Option<Result<T, StreamError>> {
    let mut guard = self.inner.lock();
    guard.result.take()
  }

  /// Records the terminal result unless one was already recorded.
  pub fn complete(&self, result: Result<T, StreamError>) {
    let mut guard = self.inner.lock();
    // first terminal result wins
    if guard.result.is_none() {
      guard.result = Some(result);
    }
  }
}

impl<T> Default for StreamCompletion<T> {
  fn default() -> Self {
    Self::new()
  }
}

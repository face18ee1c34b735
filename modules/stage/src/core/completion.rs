use super::StreamError;

/// Terminal result of a stage execution as seen through a [`StreamCompletion`](super::StreamCompletion).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion<T> {
  /// No terminal signal has reached the sink yet.
  Pending,
  /// The single terminal value or failure.
  Ready(Result<T, StreamError>),
}

impl<T> Completion<T> {
  /// Returns `true` once a terminal result is available.
  #[must_use]
  pub const fn is_ready(&self) -> bool {
    matches!(self, Self::Ready(_))
  }
}

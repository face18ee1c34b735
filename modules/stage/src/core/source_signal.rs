use super::StreamError;

/// Answer of an upstream source to an outstanding request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSignal<T> {
  /// One element answering the request.
  Element(T),
  /// No further elements exist.
  Finished,
  /// The source failed.
  Failed(StreamError),
  /// Nothing available yet; ask again on a later drive.
  Pending,
}

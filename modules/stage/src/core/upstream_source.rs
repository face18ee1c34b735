use super::{CancellationCause, SourceSignal};

/// Producer attached to the inlet of a stage.
///
/// The source is only asked for an element while a request is outstanding.
pub trait UpstreamSource<T> {
  /// Answers the outstanding request.
  fn pull(&mut self) -> SourceSignal<T>;

  /// Called once when the stage cancels upstream.
  fn on_cancel(&mut self, _cause: CancellationCause) {}
}

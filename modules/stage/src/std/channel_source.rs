//! Upstream source fed by a tokio channel.


use tokio::sync::mpsc::{Receiver, error::TryRecvError};

use crate::core::{CancellationCause, SourceSignal, StreamError, UpstreamSource};

/// Source answering requests from a bounded tokio channel.
///
/// A closed channel finishes the stream and an `Err` item fails it. When the
/// channel is empty the source answers [`SourceSignal::Pending`] and
/// [`wait`](Self::wait) must be awaited before the next drive.
pub struct ChannelSource<T> {
  receiver: Receiver<Result<T, StreamError>>,
  ready:    Option<SourceSignal<T>>,
  waiting:  bool,
}

impl<T> ChannelSource<T> {
  /// Creates a source reading from `receiver`.
  #[must_use]
  pub const fn new(receiver: Receiver<Result<T, StreamError>>) -> Self {
    Self { receiver, ready: None, waiting: false }
  }

  /// Returns `true` when a request is pending on an empty channel.
  #[must_use]
  pub const fn is_waiting(&self) -> bool {
    self.waiting
  }

  /// Waits for the next channel item and keeps it for the pending request.
  pub async fn wait(&mut self) {
    let item = self.receiver.recv().await;
    self.waiting = false;
    self.ready = Some(Self::convert(item));
  }

  fn convert(item: Option<Result<T, StreamError>>) -> SourceSignal<T> {
    match item {
      | Some(Ok(element)) => SourceSignal::Element(element),
      | Some(Err(error)) => SourceSignal::Failed(error),
      | None => SourceSignal::Finished,
    }
  }
}

impl<T> UpstreamSource<T> for ChannelSource<T> {
  fn pull(&mut self) -> SourceSignal<T> {
    if let Some(signal) = self.ready.take() {
      return signal;
    }
    match self.receiver.try_recv() {
      | Ok(item) => Self::convert(Some(item)),
      | Err(TryRecvError::Disconnected) => SourceSignal::Finished,
      | Err(TryRecvError::Empty) => {
        self.waiting = true;
        SourceSignal::Pending
      },
    }
  }

  fn on_cancel(&mut self, _cause: CancellationCause) {
    self.waiting = false;
    self.receiver.close();
  }
}

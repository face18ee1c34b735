use super::{CancellationCause, StreamError};

/// Operations a stage logic may perform on its ports from inside a callback.
///
/// Effects are applied immediately. A call that breaks the port protocol
/// returns [`StreamError::ProtocolViolation`], and the runner fails the stage
/// once the callback returns even if the error is ignored.
pub trait StageContext<In, Out> {
  /// Requests one element from upstream.
  ///
  /// # Errors
  ///
  /// Fails unless the inlet is idle.
  fn pull(&mut self) -> Result<(), StreamError>;

  /// Takes the element delivered by upstream.
  ///
  /// # Errors
  ///
  /// Fails when no element is buffered.
  fn grab(&mut self) -> Result<In, StreamError>;

  /// Pushes one element answering the open downstream demand.
  ///
  /// # Errors
  ///
  /// Fails unless the outlet is demanded and no deferred emission is queued.
  fn push(&mut self, element: Out) -> Result<(), StreamError>;

  /// Pushes now when demanded, otherwise queues the element for the next demand.
  ///
  /// # Errors
  ///
  /// Fails when the outlet is closed.
  fn emit(&mut self, element: Out) -> Result<(), StreamError>;

  /// Completes the stage once queued emissions are delivered.
  fn complete(&mut self);

  /// Fails the stage, signalling the error downstream and cancelling upstream.
  fn fail(&mut self, error: StreamError);

  /// Cancels the stage, releasing upstream and completing downstream.
  fn cancel(&mut self, cause: CancellationCause);

  /// Returns `true` when an element can be grabbed.
  fn is_available(&self) -> bool;

  /// Returns `true` while a request is pending upstream.
  fn has_been_pulled(&self) -> bool;

  /// Returns `true` once the inlet is closed.
  fn is_inlet_closed(&self) -> bool;

  /// Returns `true` while downstream demand is open.
  fn is_demanded(&self) -> bool;

  /// Returns `true` once the outlet is closed.
  fn is_outlet_closed(&self) -> bool;
}

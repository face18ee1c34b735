use super::StreamError;

/// Incremental fold over the elements of a stream.
///
/// The accumulator is updated once per element and finalized exactly once,
/// when upstream completes.
pub trait Accumulator<In>: Send {
  /// Value produced by [`finish`](Self::finish).
  type Output;

  /// Folds one element into the running state.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError`] to fail the stage; no value is emitted afterwards.
  fn update(&mut self, element: In) -> Result<(), StreamError>;

  /// Consumes the accumulator and produces the final value.
  fn finish(self) -> Self::Output;
}

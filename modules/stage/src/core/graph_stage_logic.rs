use super::{CancellationCause, StageContext, StreamError};

/// Processing logic for a single-inlet, single-outlet stage.
///
/// The runner calls exactly one entry point at a time. Returning an error
/// fails the stage with that error.
pub trait GraphStageLogic<In, Out>: Send {
  /// Called once when the stage starts.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError`] to fail the stage before any event is dispatched.
  fn on_start(&mut self, _ctx: &mut dyn StageContext<In, Out>) -> Result<(), StreamError> {
    Ok(())
  }

  /// Called when downstream requests one element.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError`] to fail the stage.
  fn on_pull(&mut self, ctx: &mut dyn StageContext<In, Out>) -> Result<(), StreamError>;

  /// Called when upstream delivered an element.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError`] to fail the stage.
  fn on_push(&mut self, ctx: &mut dyn StageContext<In, Out>) -> Result<(), StreamError>;

  /// Called when upstream finishes. Completes the stage by default.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError`] to fail the stage.
  fn on_upstream_finish(&mut self, ctx: &mut dyn StageContext<In, Out>) -> Result<(), StreamError> {
    ctx.complete();
    Ok(())
  }

  /// Called when upstream fails. Fails the stage with the same error by default.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError`] to fail the stage with a different error.
  fn on_upstream_failure(&mut self, ctx: &mut dyn StageContext<In, Out>, error: StreamError) -> Result<(), StreamError> {
    ctx.fail(error);
    Ok(())
  }

  /// Called when downstream cancels. Cancels the stage by default.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError`] to fail the stage.
  fn on_downstream_finish(
    &mut self,
    ctx: &mut dyn StageContext<In, Out>,
    cause: CancellationCause,
  ) -> Result<(), StreamError> {
    ctx.cancel(cause);
    Ok(())
  }

  /// Called exactly once after the stage reached a terminal state.
  fn on_stop(&mut self) {}
}

//! Pull-through logic of an accumulating stage.


use core::{marker::PhantomData, mem};

use super::{AccumulatePhase, Accumulator, CancellationCause, GraphStageLogic, StageContext, StreamError};

/// Logic folding upstream elements and emitting one final value.
///
/// Every downstream pull is forwarded upstream as a single request. Upstream
/// completion finalizes the accumulator and emits the value; without open
/// demand the stage stays finishing until the next pull delivers it.
pub struct AccumulateLogic<In, A>
where
  A: Accumulator<In>, {
  phase: AccumulatePhase<A>,
  _pd:   PhantomData<fn(In)>,
}

impl<In, A> AccumulateLogic<In, A>
where
  A: Accumulator<In>,
{
  /// Creates a logic folding into `accumulator`.
  #[must_use]
  pub const fn new(accumulator: A) -> Self {
    Self { phase: AccumulatePhase::Accumulating(accumulator), _pd: PhantomData }
  }

  /// Returns the current phase.
  #[must_use]
  pub const fn phase(&self) -> &AccumulatePhase<A> {
    &self.phase
  }

  fn release(&mut self) {
    self.phase = AccumulatePhase::Closed;
  }
}

impl<In, A> GraphStageLogic<In, A::Output> for AccumulateLogic<In, A>
where
  A: Accumulator<In>,
  A::Output: Send,
{
  fn on_pull(&mut self, ctx: &mut dyn StageContext<In, A::Output>) -> Result<(), StreamError> {
    match mem::replace(&mut self.phase, AccumulatePhase::Closed) {
      | AccumulatePhase::Accumulating(accumulator) => {
        self.phase = AccumulatePhase::Accumulating(accumulator);
        if !ctx.has_been_pulled() {
          ctx.pull()?;
        }
        Ok(())
      },
      | AccumulatePhase::AwaitingFinalDemand => {
        // the runner delivers the queued emission itself
        self.phase = AccumulatePhase::AwaitingFinalDemand;
        Ok(())
      },
      | AccumulatePhase::Closed => Ok(()),
    }
  }

  fn on_push(&mut self, ctx: &mut dyn StageContext<In, A::Output>) -> Result<(), StreamError> {
    let element = ctx.grab()?;
    let AccumulatePhase::Accumulating(accumulator) = &mut self.phase else {
      return Ok(());
    };
    if let Err(error) = accumulator.update(element) {
      self.release();
      return Err(error);
    }
    // demand is still open after a pull-through, so keep it flowing upstream
    if ctx.is_demanded() && !ctx.has_been_pulled() {
      ctx.pull()?;
    }
    Ok(())
  }

  fn on_upstream_finish(&mut self, ctx: &mut dyn StageContext<In, A::Output>) -> Result<(), StreamError> {
    let AccumulatePhase::Accumulating(accumulator) = mem::replace(&mut self.phase, AccumulatePhase::Closed) else {
      ctx.complete();
      return Ok(());
    };
    if !ctx.is_demanded() {
      self.phase = AccumulatePhase::AwaitingFinalDemand;
    }
    ctx.emit(accumulator.finish())?;
    ctx.complete();
    Ok(())
  }

  fn on_upstream_failure(
    &mut self,
    ctx: &mut dyn StageContext<In, A::Output>,
    error: StreamError,
  ) -> Result<(), StreamError> {
    self.release();
    ctx.fail(error);
    Ok(())
  }

  fn on_downstream_finish(
    &mut self,
    ctx: &mut dyn StageContext<In, A::Output>,
    cause: CancellationCause,
  ) -> Result<(), StreamError> {
    self.release();
    ctx.cancel(cause);
    Ok(())
  }

  fn on_stop(&mut self) {
    self.release();
  }
}

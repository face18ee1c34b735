#[cfg(test)]
mod tests;

use alloc::vec::Vec;

use super::{FuzzAction, FuzzStep, TestSinkProbe, TestSourceProbe};
use crate::core::{StageRunner, StreamError};

/// Deterministic fuzz runner injecting legal neighbour events into a stage.
///
/// Every step picks one event a well-behaved neighbour could send in the
/// current state, dispatches it to completion and records a [`FuzzStep`].
/// The same seed always yields the same trace.
pub struct StreamFuzzRunner {
  state: u64,
}

impl StreamFuzzRunner {
  /// Creates a new fuzz runner with deterministic seed.
  #[must_use]
  pub const fn new(seed: u64) -> Self {
    Self { state: seed }
  }

  const fn next_u32(&mut self) -> u32 {
    self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
    (self.state >> 32) as u32
  }

  /// Runs at most `steps` events against a started runner.
  ///
  /// Elements are produced by `element` from a seed-derived value. The run
  /// ends early once the stage stopped.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::EventQueueFull`] when the runner refuses an event.
  pub fn run_stage<In, Out, F>(
    &mut self,
    runner: &mut StageRunner<In, Out>,
    source: &mut TestSourceProbe,
    sink: &mut TestSinkProbe<Out>,
    steps: usize,
    mut element: F,
  ) -> Result<Vec<FuzzStep>, StreamError>
  where
    F: FnMut(u32) -> In, {
    let mut trace = Vec::with_capacity(steps);
    source.drain(runner);
    sink.drain(runner);
    for _ in 0..steps {
      if runner.is_stopped() {
        break;
      }
      let action = match self.next_u32() % 64 {
        | 0..=27 => FuzzAction::Pull,
        | 28..=60 => FuzzAction::Push(self.next_u32() % 1000),
        | 61 => FuzzAction::Finish,
        | 62 => FuzzAction::Fail,
        | _ => FuzzAction::Cancel,
      };
      let applied = match action {
        | FuzzAction::Pull => sink.request(runner)?,
        | FuzzAction::Push(value) => source.push(runner, element(value))?,
        | FuzzAction::Finish => source.finish(runner)?,
        | FuzzAction::Fail => source.fail(runner, StreamError::failed("fuzz failure"))?,
        | FuzzAction::Cancel => sink.cancel(runner)?,
      };
      if !applied {
        continue;
      }
      runner.run_until_idle();
      source.drain(runner);
      sink.drain(runner);
      trace.push(FuzzStep {
        action,
        state: runner.state(),
        inlet: runner.inlet_state(),
        outlet: runner.outlet_state(),
        outstanding_requests: source.outstanding(),
        open_demand: sink.open_demand(),
      });
    }
    Ok(trace)
  }
}

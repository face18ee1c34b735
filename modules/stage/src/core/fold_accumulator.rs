//! Closure-based accumulator.

#[cfg(test)]
mod tests;

use core::fmt;

use super::{Accumulator, StreamError};

/// Accumulator folding each element into a state value with a closure.
#[derive(Clone)]
pub struct FoldAccumulator<S, F> {
  state: S,
  fold:  F,
}

impl<S, F> FoldAccumulator<S, F> {
  /// Creates an accumulator starting from `zero`.
  #[must_use]
  pub const fn new(zero: S, fold: F) -> Self {
    Self { state: zero, fold }
  }

  /// Returns the running state.
  #[must_use]
  pub const fn state(&self) -> &S {
    &self.state
  }

  /// Consumes the accumulator and returns the running state.
  #[must_use]
  pub fn into_state(self) -> S {
    self.state
  }
}

impl<S: fmt::Debug, F> fmt::Debug for FoldAccumulator<S, F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FoldAccumulator").field("state", &self.state).finish_non_exhaustive()
  }
}

impl<In, S, F> Accumulator<In> for FoldAccumulator<S, F>
where
  S: Send,
  F: FnMut(&mut S, In) -> Result<(), StreamError> + Send,
{
  type Output = S;

  fn update(&mut self, element: In) -> Result<(), StreamError> {
    (self.fold)(&mut self.state, element)
  }

  fn finish(self) -> S {
    self.state
  }
}

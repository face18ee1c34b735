use alloc::boxed::Box;
use core::marker::PhantomData;

use super::{AccumulateLogic, Accumulator, FlowShape, GraphStage, GraphStageLogic};

/// Stage folding every upstream element into an accumulator and emitting the
/// finished value once upstream completes.
///
/// Each execution starts from a clone of the prototype accumulator.
pub struct AccumulateStage<In, A>
where
  A: Accumulator<In>, {
  prototype: A,
  shape:     FlowShape<In, A::Output>,
  _pd:       PhantomData<fn(In)>,
}

impl<In, A> AccumulateStage<In, A>
where
  A: Accumulator<In>,
{
  /// Creates a stage with default port names.
  #[must_use]
  pub fn new(prototype: A) -> Self {
    Self::with_shape(prototype, FlowShape::named("Accumulate.in", "Accumulate.out"))
  }

  /// Creates a stage using the provided shape.
  #[must_use]
  pub const fn with_shape(prototype: A, shape: FlowShape<In, A::Output>) -> Self {
    Self { prototype, shape, _pd: PhantomData }
  }

  /// Returns the prototype accumulator.
  #[must_use]
  pub const fn prototype(&self) -> &A {
    &self.prototype
  }
}

impl<In, A> GraphStage<In, A::Output> for AccumulateStage<In, A>
where
  In: 'static,
  A: Accumulator<In> + Clone + 'static,
  A::Output: Send + 'static,
{
  fn shape(&self) -> FlowShape<In, A::Output> {
    self.shape
  }

  fn create_logic(&self) -> Box<dyn GraphStageLogic<In, A::Output>> {
    Box::new(AccumulateLogic::new(self.prototype.clone()))
  }
}

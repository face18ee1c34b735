use alloc::boxed::Box;

use super::{FlowShape, GraphStageLogic};

/// Reusable stage definition producing a fresh logic per execution.
pub trait GraphStage<In, Out> {
  /// Returns the stage shape.
  fn shape(&self) -> FlowShape<In, Out>;

  /// Creates the stage logic instance.
  fn create_logic(&self) -> Box<dyn GraphStageLogic<In, Out>>;
}

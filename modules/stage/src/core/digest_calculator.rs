//! Stage computing a message digest over a stream of byte chunks.


use alloc::{boxed::Box, vec::Vec};

use super::{
  AccumulateStage, DigestAccumulator, DigestAlgorithm, FlowShape, GraphStage, GraphStageLogic, StreamError,
};

/// Stage hashing every upstream chunk and emitting the digest once upstream
/// completes.
///
/// Exactly one element is emitted per successful execution. An upstream
/// failure is passed downstream without a digest.
pub struct DigestCalculator {
  stage: AccumulateStage<Vec<u8>, DigestAccumulator>,
}

impl DigestCalculator {
  /// Creates a calculator for the provided algorithm.
  #[must_use]
  pub fn new(algorithm: DigestAlgorithm) -> Self {
    let shape = FlowShape::named("DigestCalculator.in", "DigestCalculator.out");
    Self { stage: AccumulateStage::with_shape(DigestAccumulator::new(algorithm), shape) }
  }

  /// Creates a calculator from an algorithm name such as `SHA-256`.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::UnsupportedAlgorithm`] for unknown names.
  pub fn from_name(name: &str) -> Result<Self, StreamError> {
    Ok(Self::new(name.parse()?))
  }

  /// Returns the selected algorithm.
  #[must_use]
  pub const fn algorithm(&self) -> DigestAlgorithm {
    self.stage.prototype().algorithm()
  }
}

impl GraphStage<Vec<u8>, Vec<u8>> for DigestCalculator {
  fn shape(&self) -> FlowShape<Vec<u8>, Vec<u8>> {
    self.stage.shape()
  }

  fn create_logic(&self) -> Box<dyn GraphStageLogic<Vec<u8>, Vec<u8>>> {
    self.stage.create_logic()
  }
}

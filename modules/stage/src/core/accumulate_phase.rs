
/// Reaction set of an accumulating stage.
#[derive(Debug)]
pub enum AccumulatePhase<A> {
  /// Folding elements; demand is passed through to upstream.
  Accumulating(A),
  /// Upstream finished without open demand; the final value is queued for the next pull.
  AwaitingFinalDemand,
  /// The final value was emitted or the stage terminated; the state is released.
  Closed,
}

impl<A> AccumulatePhase<A> {
  /// Returns `true` while elements are being folded.
  #[must_use]
  pub const fn is_accumulating(&self) -> bool {
    matches!(self, Self::Accumulating(_))
  }

  /// Returns `true` while the final value waits for demand.
  #[must_use]
  pub const fn is_awaiting_final_demand(&self) -> bool {
    matches!(self, Self::AwaitingFinalDemand)
  }

  /// Returns `true` once the state was released.
  #[must_use]
  pub const fn is_closed(&self) -> bool {
    matches!(self, Self::Closed)
  }
}

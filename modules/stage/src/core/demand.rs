/// Amount of elements a downstream sink is willing to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demand {
  /// Bounded number of elements still wanted.
  Finite(u64),
  /// The sink accepts every element.
  Unbounded,
}

impl Demand {
  /// Returns `true` if the demand is unbounded.
  #[must_use]
  pub const fn is_unbounded(&self) -> bool {
    matches!(self, Self::Unbounded)
  }

  /// Returns `true` while at least one more element may be pulled.
  #[must_use]
  pub const fn has_demand(&self) -> bool {
    match self {
      | Self::Unbounded => true,
      | Self::Finite(remaining) => *remaining > 0,
    }
  }

  /// Returns the remaining finite demand, if any.
  #[must_use]
  pub const fn remaining(&self) -> Option<u64> {
    match self {
      | Self::Finite(value) => Some(*value),
      | Self::Unbounded => None,
    }
  }
}

//! Port identifier shared between inlet and outlet ports.


use core::sync::atomic::Ordering;

use portable_atomic::AtomicU64;

use super::PortDirection;

/// Identifier shared by stage ports.
///
/// The lowest bit encodes the port direction so that an inlet and an outlet
/// never compare equal even when allocated from the same counter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortId(u64);

impl PortId {
  /// Allocates a process-unique identifier for a port of the given direction.
  #[must_use]
  pub fn next(direction: PortDirection) -> Self {
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    let value = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    Self((value << 1) | u64::from(direction == PortDirection::Output))
  }

  /// Returns the direction encoded in this identifier.
  #[must_use]
  pub const fn direction(self) -> PortDirection {
    if self.0 & 1 == 1 { PortDirection::Output } else { PortDirection::Input }
  }

  /// Returns the raw identifier value.
  #[must_use]
  pub const fn value(self) -> u64 {
    self.0
  }
}

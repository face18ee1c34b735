use core::marker::PhantomData;

use super::{PortDirection, PortId};

/// Typed inlet port.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Inlet<T> {
  id:   PortId,
  name: &'static str,
  _pd:  PhantomData<fn() -> T>,
}

impl<T> Inlet<T> {
  /// Creates a new inlet with the default name `in`.
  #[must_use]
  pub fn new() -> Self {
    Self::named("in")
  }

  /// Creates a new inlet with the provided name.
  #[must_use]
  pub fn named(name: &'static str) -> Self {
    Self { id: PortId::next(PortDirection::Input), name, _pd: PhantomData }
  }

  /// Returns the port identifier.
  #[must_use]
  pub const fn id(&self) -> PortId {
    self.id
  }

  /// Returns the port name.
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }
}

impl<T> Copy for Inlet<T> {}

impl<T> Clone for Inlet<T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Default for Inlet<T> {
  fn default() -> Self {
    Self::new()
  }
}

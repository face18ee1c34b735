use core::marker::PhantomData;

use super::{PortDirection, PortId};

/// Typed outlet port.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Outlet<T> {
  id:   PortId,
  name: &'static str,
  _pd:  PhantomData<fn() -> T>,
}

impl<T> Outlet<T> {
  /// Creates a new outlet with the default name `out`.
  #[must_use]
  pub fn new() -> Self {
    Self::named("out")
  }

  /// Creates a new outlet with the provided name.
  #[must_use]
  pub fn named(name: &'static str) -> Self {
    Self { id: PortId::next(PortDirection::Output), name, _pd: PhantomData }
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

impl<T> Copy for Outlet<T> {}

impl<T> Clone for Outlet<T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Default for Outlet<T> {
  fn default() -> Self {
    Self::new()
  }
}

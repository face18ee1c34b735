use super::{Inlet, Outlet};

/// Shape describing a single inlet and outlet.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct FlowShape<In, Out> {
  inlet:  Inlet<In>,
  outlet: Outlet<Out>,
}

impl<In, Out> FlowShape<In, Out> {
  /// Creates a new shape.
  #[must_use]
  pub const fn new(inlet: Inlet<In>, outlet: Outlet<Out>) -> Self {
    Self { inlet, outlet }
  }

  /// Creates a shape with freshly allocated ports carrying the provided names.
  #[must_use]
  pub fn named(inlet_name: &'static str, outlet_name: &'static str) -> Self {
    Self::new(Inlet::named(inlet_name), Outlet::named(outlet_name))
  }

  /// Returns the inlet.
  #[must_use]
  pub const fn inlet(&self) -> &Inlet<In> {
    &self.inlet
  }

  /// Returns the outlet.
  #[must_use]
  pub const fn outlet(&self) -> &Outlet<Out> {
    &self.outlet
  }
}

impl<In, Out> Copy for FlowShape<In, Out> {}

impl<In, Out> Clone for FlowShape<In, Out> {
  fn clone(&self) -> Self {
    *self
  }
}

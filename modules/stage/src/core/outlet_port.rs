//! Runtime state machine of an outlet.


use super::{Outlet, OutletState, ProtocolViolation};

/// Outlet together with its demand state.
///
/// The outlet never buffers: an element is forwarded downstream in the same
/// synchronous call that consumes the demand.
#[derive(Debug)]
pub struct OutletPort<T> {
  outlet: Outlet<T>,
  state:  OutletState,
}

impl<T> OutletPort<T> {
  /// Creates an idle port for the provided outlet.
  #[must_use]
  pub const fn new(outlet: Outlet<T>) -> Self {
    Self { outlet, state: OutletState::Idle }
  }

  /// Returns the outlet definition.
  #[must_use]
  pub const fn outlet(&self) -> &Outlet<T> {
    &self.outlet
  }

  /// Returns the current state.
  #[must_use]
  pub const fn state(&self) -> OutletState {
    self.state
  }

  /// Returns `true` while downstream demand is open.
  #[must_use]
  pub const fn is_demanded(&self) -> bool {
    matches!(self.state, OutletState::Demanded)
  }

  /// Returns `true` once the outlet is closed.
  #[must_use]
  pub const fn is_closed(&self) -> bool {
    matches!(self.state, OutletState::Closed)
  }

  /// Records one unit of downstream demand.
  ///
  /// # Errors
  ///
  /// Returns [`ProtocolViolation::DemandWhileDemanded`] while previous demand is
  /// open and [`ProtocolViolation::DemandOnClosed`] once the port is closed.
  pub const fn demand(&mut self) -> Result<(), ProtocolViolation> {
    match self.state {
      | OutletState::Idle => {
        self.state = OutletState::Demanded;
        Ok(())
      },
      | OutletState::Demanded => Err(ProtocolViolation::DemandWhileDemanded),
      | OutletState::Closed => Err(ProtocolViolation::DemandOnClosed),
    }
  }

  /// Consumes the open demand for one emitted element.
  ///
  /// # Errors
  ///
  /// Returns [`ProtocolViolation::EmitWithoutDemand`] when the port is idle and
  /// [`ProtocolViolation::EmitOnClosed`] once it is closed.
  pub const fn emit(&mut self) -> Result<(), ProtocolViolation> {
    match self.state {
      | OutletState::Demanded => {
        self.state = OutletState::Idle;
        Ok(())
      },
      | OutletState::Idle => Err(ProtocolViolation::EmitWithoutDemand),
      | OutletState::Closed => Err(ProtocolViolation::EmitOnClosed),
    }
  }

  /// Closes the port.
  pub const fn close(&mut self) {
    self.state = OutletState::Closed;
  }
}

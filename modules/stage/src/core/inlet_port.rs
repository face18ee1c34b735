//! Runtime state machine of an inlet.

#[cfg(test)]
mod tests;

use super::{Inlet, InletState, ProtocolViolation};

/// Inlet together with its demand/data state and single-element buffer.
///
/// Transitions:
/// `Idle -> AwaitingData` on [`request`](Self::request),
/// `AwaitingData -> HasData` on [`deliver`](Self::deliver),
/// `HasData -> Idle` on [`grab`](Self::grab), and any state to `Closed` on
/// [`close`](Self::close). An element delivered before the inlet closed stays
/// grabbable after the close.
#[derive(Debug)]
pub struct InletPort<T> {
  inlet:  Inlet<T>,
  state:  InletState,
  buffer: Option<T>,
}

impl<T> InletPort<T> {
  /// Creates an idle port for the provided inlet.
  #[must_use]
  pub const fn new(inlet: Inlet<T>) -> Self {
    Self { inlet, state: InletState::Idle, buffer: None }
  }

  /// Returns the inlet definition.
  #[must_use]
  pub const fn inlet(&self) -> &Inlet<T> {
    &self.inlet
  }

  /// Returns the current state.
  #[must_use]
  pub const fn state(&self) -> InletState {
    self.state
  }

  /// Returns `true` when an element can be grabbed.
  #[must_use]
  pub const fn is_available(&self) -> bool {
    self.buffer.is_some()
  }

  /// Returns `true` while a request is pending upstream.
  #[must_use]
  pub const fn has_been_pulled(&self) -> bool {
    matches!(self.state, InletState::AwaitingData)
  }

  /// Returns `true` once the inlet is closed.
  #[must_use]
  pub const fn is_closed(&self) -> bool {
    matches!(self.state, InletState::Closed)
  }

  /// Issues demand upstream.
  ///
  /// # Errors
  ///
  /// Returns [`ProtocolViolation::RequestWhilePending`] unless the port is idle, and
  /// [`ProtocolViolation::RequestOnClosed`] once it is closed.
  pub const fn request(&mut self) -> Result<(), ProtocolViolation> {
    match self.state {
      | InletState::Idle => {
        self.state = InletState::AwaitingData;
        Ok(())
      },
      | InletState::AwaitingData | InletState::HasData => Err(ProtocolViolation::RequestWhilePending),
      | InletState::Closed => Err(ProtocolViolation::RequestOnClosed),
    }
  }

  /// Stores an element delivered by upstream.
  ///
  /// # Errors
  ///
  /// Returns [`ProtocolViolation::DeliveryWithoutRequest`] when no request is pending and
  /// [`ProtocolViolation::DeliveryOnClosed`] once the port is closed.
  pub fn deliver(&mut self, element: T) -> Result<(), ProtocolViolation> {
    match self.state {
      | InletState::AwaitingData => {
        self.buffer = Some(element);
        self.state = InletState::HasData;
        Ok(())
      },
      | InletState::Idle | InletState::HasData => Err(ProtocolViolation::DeliveryWithoutRequest),
      | InletState::Closed => Err(ProtocolViolation::DeliveryOnClosed),
    }
  }

  /// Takes the buffered element.
  ///
  /// # Errors
  ///
  /// Returns [`ProtocolViolation::GrabWithoutData`] when nothing is buffered.
  pub fn grab(&mut self) -> Result<T, ProtocolViolation> {
    let element = self.buffer.take().ok_or(ProtocolViolation::GrabWithoutData)?;
    if self.state == InletState::HasData {
      self.state = InletState::Idle;
    }
    Ok(element)
  }

  /// Closes the port, keeping an already delivered element grabbable.
  pub const fn close(&mut self) {
    self.state = InletState::Closed;
  }

  /// Closes the port and drops any buffered element.
  pub fn close_discarding(&mut self) {
    self.buffer = None;
    self.state = InletState::Closed;
  }
}

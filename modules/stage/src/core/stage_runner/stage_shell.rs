use alloc::{collections::VecDeque, string::String};

use tracing::{trace, warn};

use super::LOG_TARGET;
use crate::core::{
  CancellationCause, DownstreamSignal, FlowShape, InletPort, OutletPort, ProtocolViolation, StageContext, StreamError,
  StreamState, UpstreamSignal,
};

/// Port state and outbound signal queues of a running stage.
///
/// The shell is the [`StageContext`] handed to the logic, so every port
/// operation is an immediate state transition on the shell.
pub(super) struct StageShell<In, Out> {
  pub(super) name:    String,
  pub(super) inlet:   InletPort<In>,
  pub(super) outlet:  OutletPort<Out>,
  pub(super) state:   StreamState,
  pending:            VecDeque<Out>,
  upstream:           VecDeque<UpstreamSignal>,
  downstream:         VecDeque<DownstreamSignal<Out>>,
  upstream_cancelled: bool,
  violation:          Option<StreamError>,
}

impl<In, Out> StageShell<In, Out> {
  pub(super) fn new(name: String, shape: FlowShape<In, Out>) -> Self {
    Self {
      name,
      inlet: InletPort::new(*shape.inlet()),
      outlet: OutletPort::new(*shape.outlet()),
      state: StreamState::Idle,
      pending: VecDeque::new(),
      upstream: VecDeque::new(),
      downstream: VecDeque::new(),
      upstream_cancelled: false,
      violation: None,
    }
  }

  pub(super) fn pending_emissions(&self) -> usize {
    self.pending.len()
  }

  pub(super) const fn upstream_cancelled(&self) -> bool {
    self.upstream_cancelled
  }

  pub(super) fn poll_upstream(&mut self) -> Option<UpstreamSignal> {
    self.upstream.pop_front()
  }

  pub(super) fn poll_downstream(&mut self) -> Option<DownstreamSignal<Out>> {
    self.downstream.pop_front()
  }

  pub(super) fn has_signals(&self) -> bool {
    !self.upstream.is_empty() || !self.downstream.is_empty()
  }

  pub(super) const fn take_violation(&mut self) -> Option<StreamError> {
    self.violation.take()
  }

  /// Records an illegal transition and returns the matching error.
  ///
  /// Only the first violation of a callback is kept.
  pub(super) fn violate(&mut self, port: &'static str, violation: ProtocolViolation) -> StreamError {
    warn!(target: LOG_TARGET, stage = %self.name, port, %violation, "protocol violation");
    let error = StreamError::ProtocolViolation { port, violation };
    if self.violation.is_none() {
      self.violation = Some(error.clone());
    }
    error
  }

  /// Delivers the oldest queued emission against freshly opened demand.
  pub(super) fn flush_emission(&mut self) -> Result<(), StreamError> {
    let Some(element) = self.pending.pop_front() else {
      return Ok(());
    };
    self.emit_now(element)?;
    if self.pending.is_empty() && self.state == StreamState::Finishing {
      self.complete_now();
    }
    Ok(())
  }

  fn emit_now(&mut self, element: Out) -> Result<(), StreamError> {
    if let Err(violation) = self.outlet.emit() {
      return Err(self.violate(self.outlet.outlet().name(), violation));
    }
    trace!(target: LOG_TARGET, stage = %self.name, port = self.outlet.outlet().name(), "push downstream");
    self.downstream.push_back(DownstreamSignal::Push(element));
    Ok(())
  }

  fn complete_now(&mut self) {
    if !self.outlet.is_closed() {
      self.outlet.close();
      self.downstream.push_back(DownstreamSignal::Complete);
    }
    self.release_upstream(CancellationCause::StageWasCompleted);
    self.state = StreamState::Completed;
  }

  fn release_upstream(&mut self, cause: CancellationCause) {
    if self.inlet.is_closed() {
      // upstream already terminated on its own; nothing to cancel
      self.inlet.close_discarding();
      return;
    }
    self.inlet.close_discarding();
    self.upstream_cancelled = true;
    trace!(target: LOG_TARGET, stage = %self.name, port = self.inlet.inlet().name(), ?cause, "cancel upstream");
    self.upstream.push_back(UpstreamSignal::Cancel(cause));
  }
}

impl<In, Out> StageContext<In, Out> for StageShell<In, Out> {
  fn pull(&mut self) -> Result<(), StreamError> {
    if let Err(violation) = self.inlet.request() {
      return Err(self.violate(self.inlet.inlet().name(), violation));
    }
    trace!(target: LOG_TARGET, stage = %self.name, port = self.inlet.inlet().name(), "request upstream");
    self.upstream.push_back(UpstreamSignal::Request);
    Ok(())
  }

  fn grab(&mut self) -> Result<In, StreamError> {
    match self.inlet.grab() {
      | Ok(element) => Ok(element),
      | Err(violation) => Err(self.violate(self.inlet.inlet().name(), violation)),
    }
  }

  fn push(&mut self, element: Out) -> Result<(), StreamError> {
    if !self.pending.is_empty() {
      return Err(self.violate(self.outlet.outlet().name(), ProtocolViolation::PushWhileEmitting));
    }
    self.emit_now(element)
  }

  fn emit(&mut self, element: Out) -> Result<(), StreamError> {
    if self.outlet.is_closed() {
      return Err(self.violate(self.outlet.outlet().name(), ProtocolViolation::EmitOnClosed));
    }
    if self.outlet.is_demanded() && self.pending.is_empty() {
      return self.emit_now(element);
    }
    self.pending.push_back(element);
    Ok(())
  }

  fn complete(&mut self) {
    if self.state.is_terminal() || self.state == StreamState::Finishing {
      return;
    }
    if self.pending.is_empty() {
      self.complete_now();
    } else {
      self.release_upstream(CancellationCause::StageWasCompleted);
      self.state = StreamState::Finishing;
    }
  }

  fn fail(&mut self, error: StreamError) {
    if self.state.is_terminal() {
      return;
    }
    self.pending.clear();
    if !self.outlet.is_closed() {
      self.outlet.close();
      self.downstream.push_back(DownstreamSignal::Fail(error.clone()));
    }
    self.release_upstream(CancellationCause::Failed(error));
    self.state = StreamState::Failed;
  }

  fn cancel(&mut self, cause: CancellationCause) {
    if self.state.is_terminal() {
      return;
    }
    self.pending.clear();
    self.release_upstream(cause);
    if !self.outlet.is_closed() {
      self.outlet.close();
      self.downstream.push_back(DownstreamSignal::Complete);
    }
    self.state = StreamState::Cancelled;
  }

  fn is_available(&self) -> bool {
    self.inlet.is_available()
  }

  fn has_been_pulled(&self) -> bool {
    self.inlet.has_been_pulled()
  }

  fn is_inlet_closed(&self) -> bool {
    self.inlet.is_closed()
  }

  fn is_demanded(&self) -> bool {
    self.outlet.is_demanded()
  }

  fn is_outlet_closed(&self) -> bool {
    self.outlet.is_closed()
  }
}

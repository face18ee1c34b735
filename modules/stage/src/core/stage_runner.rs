//! Single-threaded cooperative runner for one stage.

mod stage_shell;
#[cfg(test)]
mod tests;

use alloc::{boxed::Box, collections::VecDeque, string::String};

use stage_shell::StageShell;
use tracing::{debug, trace, warn};

use super::{
  CancellationCause, DownstreamSignal, DriveOutcome, FlowShape, GraphStage, GraphStageLogic, InletState, OutletState,
  StageContext, StageEvent, StageSettings, StreamError, StreamState, UpstreamSignal,
};

pub(crate) const LOG_TARGET: &str = "fraktor::stage";

/// Owns a stage logic with its two ports and dispatches external events into it.
///
/// Neighbours never call into the logic directly: they offer [`StageEvent`]s,
/// which [`drive`](Self::drive) dispatches one at a time. Port operations the
/// logic performs inside a callback are applied immediately and surface as
/// [`UpstreamSignal`]s and [`DownstreamSignal`]s to be polled by the caller.
pub struct StageRunner<In, Out> {
  logic:    Option<Box<dyn GraphStageLogic<In, Out>>>,
  shell:    StageShell<In, Out>,
  events:   VecDeque<StageEvent<In>>,
  settings: StageSettings,
}

impl<In, Out> StageRunner<In, Out> {
  /// Creates a runner for a fresh logic of the provided stage.
  #[must_use]
  pub fn new<G>(stage: &G, settings: StageSettings) -> Self
  where
    G: GraphStage<In, Out> + ?Sized, {
    Self::from_logic(stage.shape(), stage.create_logic(), settings)
  }

  /// Creates a runner from an already constructed logic.
  #[must_use]
  pub fn from_logic(
    shape: FlowShape<In, Out>,
    logic: Box<dyn GraphStageLogic<In, Out>>,
    settings: StageSettings,
  ) -> Self {
    let name = String::from(settings.name());
    Self { logic: Some(logic), shell: StageShell::new(name, shape), events: VecDeque::new(), settings }
  }

  /// Returns the stage name.
  #[must_use]
  pub fn name(&self) -> &str {
    &self.shell.name
  }

  /// Returns the runner settings.
  #[must_use]
  pub const fn settings(&self) -> &StageSettings {
    &self.settings
  }

  /// Returns the lifecycle state.
  #[must_use]
  pub const fn state(&self) -> StreamState {
    self.shell.state
  }

  /// Returns the inlet state.
  #[must_use]
  pub const fn inlet_state(&self) -> InletState {
    self.shell.inlet.state()
  }

  /// Returns the outlet state.
  #[must_use]
  pub const fn outlet_state(&self) -> OutletState {
    self.shell.outlet.state()
  }

  /// Returns the number of emissions waiting for downstream demand.
  #[must_use]
  pub fn pending_emissions(&self) -> usize {
    self.shell.pending_emissions()
  }

  /// Returns `true` while events wait for dispatch.
  #[must_use]
  pub fn has_pending_events(&self) -> bool {
    !self.events.is_empty()
  }

  /// Returns `true` while outbound signals wait to be polled.
  #[must_use]
  pub fn has_pending_signals(&self) -> bool {
    self.shell.has_signals()
  }

  /// Returns `true` once the logic has been stopped and released.
  #[must_use]
  pub const fn is_stopped(&self) -> bool {
    self.logic.is_none()
  }

  /// Starts the stage and runs its `on_start` callback.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::AlreadyStarted`] when called more than once.
  pub fn start(&mut self) -> Result<(), StreamError> {
    if self.shell.state != StreamState::Idle {
      return Err(StreamError::AlreadyStarted);
    }
    self.shell.state = StreamState::Running;
    debug!(target: LOG_TARGET, stage = %self.shell.name, "stage started");
    self.invoke(|logic, ctx| logic.on_start(ctx));
    Ok(())
  }

  /// Queues an external event for dispatch.
  ///
  /// Events offered after the stage terminated are dropped.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::EventQueueFull`] when the queue is at capacity.
  pub fn offer(&mut self, event: StageEvent<In>) -> Result<(), StreamError> {
    if self.shell.state.is_terminal() {
      trace!(target: LOG_TARGET, stage = %self.shell.name, event = event.label(), "event dropped after termination");
      return Ok(());
    }
    if self.events.len() >= self.settings.event_queue_capacity() {
      warn!(target: LOG_TARGET, stage = %self.shell.name, event = event.label(), "event queue full");
      return Err(StreamError::EventQueueFull);
    }
    self.events.push_back(event);
    Ok(())
  }

  /// Queues an element delivered by upstream.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::EventQueueFull`] when the queue is at capacity.
  pub fn on_upstream_push(&mut self, element: In) -> Result<(), StreamError> {
    self.offer(StageEvent::UpstreamPush(element))
  }

  /// Queues upstream completion.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::EventQueueFull`] when the queue is at capacity.
  pub fn on_upstream_finish(&mut self) -> Result<(), StreamError> {
    self.offer(StageEvent::UpstreamFinish)
  }

  /// Queues an upstream failure.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::EventQueueFull`] when the queue is at capacity.
  pub fn on_upstream_failure(&mut self, error: StreamError) -> Result<(), StreamError> {
    self.offer(StageEvent::UpstreamFailure(error))
  }

  /// Queues one unit of downstream demand.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::EventQueueFull`] when the queue is at capacity.
  pub fn on_downstream_pull(&mut self) -> Result<(), StreamError> {
    self.offer(StageEvent::DownstreamPull)
  }

  /// Queues a downstream cancellation.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::EventQueueFull`] when the queue is at capacity.
  pub fn on_downstream_cancel(&mut self, cause: CancellationCause) -> Result<(), StreamError> {
    self.offer(StageEvent::DownstreamCancel(cause))
  }

  /// Takes the oldest signal addressed to upstream.
  pub fn poll_upstream_signal(&mut self) -> Option<UpstreamSignal> {
    self.shell.poll_upstream()
  }

  /// Takes the oldest signal addressed to downstream.
  pub fn poll_downstream_signal(&mut self) -> Option<DownstreamSignal<Out>> {
    self.shell.poll_downstream()
  }

  /// Dispatches queued events, at most `max_dispatch_per_drive` of them.
  #[must_use]
  pub fn drive(&mut self) -> DriveOutcome {
    if !self.shell.state.is_active() {
      return DriveOutcome::Idle;
    }
    let mut dispatched = 0_usize;
    while dispatched < self.settings.max_dispatch_per_drive() {
      let Some(event) = self.events.pop_front() else {
        break;
      };
      self.dispatch(event);
      dispatched += 1;
    }
    if dispatched == 0 { DriveOutcome::Idle } else { DriveOutcome::Progressed }
  }

  /// Drives until no queued event is left.
  pub fn run_until_idle(&mut self) {
    while self.drive() == DriveOutcome::Progressed {}
  }

  fn dispatch(&mut self, event: StageEvent<In>) {
    if !self.shell.state.is_active() {
      return;
    }
    trace!(target: LOG_TARGET, stage = %self.shell.name, event = event.label(), "dispatch");
    match event {
      | StageEvent::UpstreamPush(element) => self.dispatch_push(element),
      | StageEvent::UpstreamFinish => {
        if self.shell.inlet.is_closed() {
          return;
        }
        self.shell.inlet.close();
        self.invoke(|logic, ctx| logic.on_upstream_finish(ctx));
      },
      | StageEvent::UpstreamFailure(error) => {
        if self.shell.inlet.is_closed() {
          return;
        }
        self.shell.inlet.close_discarding();
        self.invoke(|logic, ctx| logic.on_upstream_failure(ctx, error));
      },
      | StageEvent::DownstreamPull => self.dispatch_pull(),
      | StageEvent::DownstreamCancel(cause) => {
        if self.shell.outlet.is_closed() {
          return;
        }
        self.shell.outlet.close();
        self.invoke(|logic, ctx| logic.on_downstream_finish(ctx, cause));
      },
    }
  }

  fn dispatch_push(&mut self, element: In) {
    if self.shell.inlet.is_closed() && self.shell.upstream_cancelled() {
      // crossed our cancellation in flight
      return;
    }
    if let Err(violation) = self.shell.inlet.deliver(element) {
      let port = self.shell.inlet.inlet().name();
      let error = self.shell.violate(port, violation);
      self.fail_with(error);
      return;
    }
    self.invoke(|logic, ctx| logic.on_push(ctx));
  }

  fn dispatch_pull(&mut self) {
    if self.shell.outlet.is_closed() {
      return;
    }
    if let Err(violation) = self.shell.outlet.demand() {
      let port = self.shell.outlet.outlet().name();
      let error = self.shell.violate(port, violation);
      self.fail_with(error);
      return;
    }
    if self.shell.pending_emissions() > 0 {
      let result = self.shell.flush_emission();
      self.settle(result);
      return;
    }
    self.invoke(|logic, ctx| logic.on_pull(ctx));
  }

  fn invoke<F>(&mut self, callback: F)
  where
    F: FnOnce(&mut dyn GraphStageLogic<In, Out>, &mut dyn StageContext<In, Out>) -> Result<(), StreamError>, {
    let Some(logic) = self.logic.as_mut() else {
      return;
    };
    let result = callback(logic.as_mut(), &mut self.shell);
    self.settle(result);
  }

  fn settle(&mut self, result: Result<(), StreamError>) {
    if let Some(violation) = self.shell.take_violation() {
      self.fail_with(violation);
    } else if let Err(error) = result {
      self.fail_with(error);
    } else {
      self.stop_if_terminal();
    }
  }

  fn fail_with(&mut self, error: StreamError) {
    // a violation inside a callback also lands here; drop the duplicate record
    let _ = self.shell.take_violation();
    self.shell.fail(error);
    self.stop_if_terminal();
  }

  fn stop_if_terminal(&mut self) {
    if !self.shell.state.is_terminal() {
      return;
    }
    if let Some(mut logic) = self.logic.take() {
      logic.on_stop();
      self.events.clear();
      debug!(target: LOG_TARGET, stage = %self.shell.name, state = ?self.shell.state, "stage stopped");
    }
  }
}

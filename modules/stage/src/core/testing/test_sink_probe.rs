use alloc::vec::Vec;

use crate::core::{CancellationCause, DownstreamSignal, StageRunner, StreamError};

/// Downstream neighbour of a [`StageRunner`] that checks emissions against demand.
#[derive(Debug)]
pub struct TestSinkProbe<T> {
  received:           Vec<T>,
  open_demand:        usize,
  unrequested_pushes: usize,
  terminal_signals:   usize,
  completed:          bool,
  failure:            Option<StreamError>,
  cancelled:          bool,
}

impl<T> TestSinkProbe<T> {
  /// Creates a probe without demand.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      received:           Vec::new(),
      open_demand:        0,
      unrequested_pushes: 0,
      terminal_signals:   0,
      completed:          false,
      failure:            None,
      cancelled:          false,
    }
  }

  /// Returns the received elements.
  #[must_use]
  pub fn received(&self) -> &[T] {
    &self.received
  }

  /// Returns pulls not yet answered.
  #[must_use]
  pub const fn open_demand(&self) -> usize {
    self.open_demand
  }

  /// Returns elements pushed without an open pull.
  #[must_use]
  pub const fn unrequested_pushes(&self) -> usize {
    self.unrequested_pushes
  }

  /// Returns how many completion or failure signals arrived.
  #[must_use]
  pub const fn terminal_signals(&self) -> usize {
    self.terminal_signals
  }

  /// Returns `true` after a completion signal.
  #[must_use]
  pub const fn is_completed(&self) -> bool {
    self.completed
  }

  /// Returns the failure signal, if any.
  #[must_use]
  pub const fn failure(&self) -> Option<&StreamError> {
    self.failure.as_ref()
  }

  /// Returns `true` once the probe cancelled the stage.
  #[must_use]
  pub const fn is_cancelled(&self) -> bool {
    self.cancelled
  }

  const fn is_closed(&self) -> bool {
    self.terminal_signals > 0 || self.cancelled
  }

  /// Consumes every downstream signal of the runner.
  pub fn drain<In>(&mut self, runner: &mut StageRunner<In, T>) {
    while let Some(signal) = runner.poll_downstream_signal() {
      self.record(signal);
    }
  }

  /// Records one downstream signal.
  pub fn record(&mut self, signal: DownstreamSignal<T>) {
    match signal {
      | DownstreamSignal::Push(element) => {
        if self.open_demand == 0 {
          self.unrequested_pushes += 1;
        } else {
          self.open_demand -= 1;
        }
        self.received.push(element);
      },
      | DownstreamSignal::Complete => {
        self.terminal_signals += 1;
        self.completed = true;
      },
      | DownstreamSignal::Fail(error) => {
        self.terminal_signals += 1;
        self.failure = Some(error);
      },
    }
  }

  /// Pulls one element unless a pull is already open or the stream ended.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::EventQueueFull`] when the runner refuses the event.
  pub fn request<In>(&mut self, runner: &mut StageRunner<In, T>) -> Result<bool, StreamError> {
    if self.is_closed() || self.open_demand > 0 {
      return Ok(false);
    }
    self.open_demand = 1;
    runner.on_downstream_pull()?;
    Ok(true)
  }

  /// Cancels the stage unless the stream already ended.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::EventQueueFull`] when the runner refuses the event.
  pub fn cancel<In>(&mut self, runner: &mut StageRunner<In, T>) -> Result<bool, StreamError> {
    if self.is_closed() {
      return Ok(false);
    }
    self.cancelled = true;
    self.open_demand = 0;
    runner.on_downstream_cancel(CancellationCause::NoMoreElementsNeeded)?;
    Ok(true)
  }
}

impl<T> Default for TestSinkProbe<T> {
  fn default() -> Self {
    Self::new()
  }
}

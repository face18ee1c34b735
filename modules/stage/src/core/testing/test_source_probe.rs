use crate::core::{CancellationCause, StageRunner, StreamError, UpstreamSignal};

/// Upstream neighbour of a [`StageRunner`] that checks the request protocol.
///
/// Elements are only offered against an outstanding request.
#[derive(Debug, Default)]
pub struct TestSourceProbe {
  outstanding:           usize,
  requests:              usize,
  overlapping_requests:  usize,
  requests_after_cancel: usize,
  cancellation:          Option<CancellationCause>,
  terminated:            bool,
}

impl TestSourceProbe {
  /// Creates a probe without outstanding requests.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns requests not yet answered.
  #[must_use]
  pub const fn outstanding(&self) -> usize {
    self.outstanding
  }

  /// Returns every request received.
  #[must_use]
  pub const fn requests(&self) -> usize {
    self.requests
  }

  /// Returns requests received while another one was outstanding.
  #[must_use]
  pub const fn overlapping_requests(&self) -> usize {
    self.overlapping_requests
  }

  /// Returns requests received after the stage cancelled upstream.
  #[must_use]
  pub const fn requests_after_cancel(&self) -> usize {
    self.requests_after_cancel
  }

  /// Returns the cancellation cause, if any.
  #[must_use]
  pub const fn cancellation(&self) -> Option<&CancellationCause> {
    self.cancellation.as_ref()
  }

  /// Returns `true` once the probe finished, failed or was cancelled.
  #[must_use]
  pub const fn is_terminated(&self) -> bool {
    self.terminated
  }

  /// Consumes every upstream signal of the runner.
  pub fn drain<In, Out>(&mut self, runner: &mut StageRunner<In, Out>) {
    while let Some(signal) = runner.poll_upstream_signal() {
      self.record(signal);
    }
  }

  /// Records one upstream signal.
  pub fn record(&mut self, signal: UpstreamSignal) {
    match signal {
      | UpstreamSignal::Request => {
        self.requests += 1;
        if self.cancellation.is_some() {
          self.requests_after_cancel += 1;
        }
        if self.outstanding > 0 {
          self.overlapping_requests += 1;
        }
        self.outstanding += 1;
      },
      | UpstreamSignal::Cancel(cause) => {
        self.outstanding = 0;
        self.terminated = true;
        self.cancellation = Some(cause);
      },
    }
  }

  /// Delivers `element` when a request is outstanding.
  ///
  /// Returns `false` without touching the runner otherwise.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::EventQueueFull`] when the runner refuses the event.
  pub fn push<In, Out>(&mut self, runner: &mut StageRunner<In, Out>, element: In) -> Result<bool, StreamError> {
    if self.terminated || self.outstanding == 0 {
      return Ok(false);
    }
    self.outstanding -= 1;
    runner.on_upstream_push(element)?;
    Ok(true)
  }

  /// Finishes upstream unless already terminated.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::EventQueueFull`] when the runner refuses the event.
  pub fn finish<In, Out>(&mut self, runner: &mut StageRunner<In, Out>) -> Result<bool, StreamError> {
    if self.terminated {
      return Ok(false);
    }
    self.terminate();
    runner.on_upstream_finish()?;
    Ok(true)
  }

  /// Fails upstream unless already terminated.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::EventQueueFull`] when the runner refuses the event.
  pub fn fail<In, Out>(&mut self, runner: &mut StageRunner<In, Out>, error: StreamError) -> Result<bool, StreamError> {
    if self.terminated {
      return Ok(false);
    }
    self.terminate();
    runner.on_upstream_failure(error)?;
    Ok(true)
  }

  const fn terminate(&mut self) {
    self.terminated = true;
    self.outstanding = 0;
  }
}

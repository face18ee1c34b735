//! Synchronous driver connecting a stage to a source and a sink.


use tracing::trace;

use super::{
  CancellationCause, DemandTracker, DownstreamSignal, DownstreamSink, DriveOutcome, GraphStage, LOG_TARGET,
  OutletState, SinkDecision, SourceSignal, StageRunner, StageSettings, StreamError, UpstreamSignal, UpstreamSource,
};

/// Drives a [`StageRunner`] against an attached source and sink.
///
/// Sink demand is converted into downstream pulls one unit at a time, and the
/// source is only asked for an element while the stage has a request
/// outstanding.
pub struct StageDriver<In, Out, S, K> {
  runner:          StageRunner<In, Out>,
  source:          S,
  sink:            K,
  demand:          DemandTracker,
  source_requests: usize,
  sink_closed:     bool,
  started:         bool,
}

impl<In, Out, S, K> StageDriver<In, Out, S, K>
where
  S: UpstreamSource<In>,
  K: DownstreamSink<Out>,
{
  /// Creates a driver for a fresh execution of `stage`.
  #[must_use]
  pub fn new<G>(stage: &G, source: S, sink: K, settings: StageSettings) -> Self
  where
    G: GraphStage<In, Out> + ?Sized, {
    Self::from_runner(StageRunner::new(stage, settings), source, sink)
  }

  /// Creates a driver around an existing, not yet started runner.
  #[must_use]
  pub const fn from_runner(runner: StageRunner<In, Out>, source: S, sink: K) -> Self {
    Self { runner, source, sink, demand: DemandTracker::new(), source_requests: 0, sink_closed: false, started: false }
  }

  /// Returns the driven runner.
  #[must_use]
  pub const fn runner(&self) -> &StageRunner<In, Out> {
    &self.runner
  }

  /// Returns the attached source.
  #[must_use]
  pub const fn source(&self) -> &S {
    &self.source
  }

  /// Returns the attached source for in-place updates.
  pub const fn source_mut(&mut self) -> &mut S {
    &mut self.source
  }

  /// Returns the attached sink.
  #[must_use]
  pub const fn sink(&self) -> &K {
    &self.sink
  }

  /// Returns `true` once the stage terminated and every signal was delivered.
  #[must_use]
  pub fn is_finished(&self) -> bool {
    self.runner.is_stopped() && !self.runner.has_pending_signals()
  }

  /// Starts the stage and collects the initial sink demand.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::AlreadyStarted`] when called twice, or the error
  /// raised by the sink while announcing demand.
  pub fn start(&mut self) -> Result<(), StreamError> {
    if self.started {
      return Err(StreamError::AlreadyStarted);
    }
    self.runner.start()?;
    self.started = true;
    self.sink.on_start(&mut self.demand)?;
    self.forward_signals()?;
    Ok(())
  }

  /// Exchanges events and signals until no further progress is possible.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::NotStarted`] before [`start`](Self::start), or
  /// [`StreamError::EventQueueFull`] when the runner refuses an event.
  pub fn drive(&mut self) -> Result<DriveOutcome, StreamError> {
    if !self.started {
      return Err(StreamError::NotStarted);
    }
    let mut outcome = DriveOutcome::Idle;
    loop {
      let mut progressed = self.offer_demand()?;
      self.runner.run_until_idle();
      progressed |= self.forward_signals()?;
      progressed |= self.answer_request()?;
      if !progressed {
        break;
      }
      outcome = DriveOutcome::Progressed;
    }
    Ok(outcome)
  }

  /// Starts if needed and drives until the stage terminated.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::WouldBlock`] when the source keeps answering
  /// [`SourceSignal::Pending`], or any error of [`start`](Self::start) and
  /// [`drive`](Self::drive).
  pub fn run(&mut self) -> Result<(), StreamError> {
    if !self.started {
      self.start()?;
    }
    while !self.is_finished() {
      if self.drive()? == DriveOutcome::Idle {
        return Err(StreamError::WouldBlock);
      }
    }
    Ok(())
  }

  fn offer_demand(&mut self) -> Result<bool, StreamError> {
    let runner = &self.runner;
    if self.sink_closed || runner.is_stopped() || runner.has_pending_events() {
      return Ok(false);
    }
    if runner.outlet_state() != OutletState::Idle || !self.demand.consume_one() {
      return Ok(false);
    }
    self.runner.on_downstream_pull()?;
    Ok(true)
  }

  fn forward_signals(&mut self) -> Result<bool, StreamError> {
    let mut forwarded = false;
    while let Some(signal) = self.runner.poll_upstream_signal() {
      forwarded = true;
      match signal {
        | UpstreamSignal::Request => self.source_requests += 1,
        | UpstreamSignal::Cancel(cause) => {
          self.source_requests = 0;
          self.source.on_cancel(cause);
        },
      }
    }
    while let Some(signal) = self.runner.poll_downstream_signal() {
      forwarded = true;
      self.deliver(signal)?;
    }
    Ok(forwarded)
  }

  fn deliver(&mut self, signal: DownstreamSignal<Out>) -> Result<(), StreamError> {
    if self.sink_closed {
      return Ok(());
    }
    match signal {
      | DownstreamSignal::Push(element) => match self.sink.on_push(element, &mut self.demand) {
        | Ok(SinkDecision::Continue) => {},
        | Ok(SinkDecision::Complete) => {
          self.close_sink();
          self.runner.on_downstream_cancel(CancellationCause::NoMoreElementsNeeded)?;
        },
        | Err(error) => {
          self.close_sink();
          self.sink.on_error(error.clone());
          self.runner.on_downstream_cancel(CancellationCause::Failed(error))?;
        },
      },
      | DownstreamSignal::Complete => {
        self.close_sink();
        self.sink.on_complete();
      },
      | DownstreamSignal::Fail(error) => {
        self.close_sink();
        self.sink.on_error(error);
      },
    }
    Ok(())
  }

  fn close_sink(&mut self) {
    self.sink_closed = true;
    self.demand.clear();
  }

  fn answer_request(&mut self) -> Result<bool, StreamError> {
    if self.source_requests == 0 || self.runner.is_stopped() {
      return Ok(false);
    }
    match self.source.pull() {
      | SourceSignal::Element(element) => {
        trace!(target: LOG_TARGET, stage = self.runner.name(), "source element");
        self.source_requests -= 1;
        self.runner.on_upstream_push(element)?;
      },
      | SourceSignal::Finished => {
        trace!(target: LOG_TARGET, stage = self.runner.name(), "source finished");
        self.source_requests = 0;
        self.runner.on_upstream_finish()?;
      },
      | SourceSignal::Failed(error) => {
        trace!(target: LOG_TARGET, stage = self.runner.name(), %error, "source failed");
        self.source_requests = 0;
        self.runner.on_upstream_failure(error)?;
      },
      | SourceSignal::Pending => return Ok(false),
    }
    Ok(true)
  }
}

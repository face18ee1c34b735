//! Async driver running a stage against a tokio channel.


use alloc::vec::Vec;

use tokio::sync::mpsc::Receiver;
use tracing::debug;

use super::ChannelSource;
use crate::core::{
  DownstreamSink, DriveOutcome, GraphStage, HeadSink, LOG_TARGET, SeqSink, StageDriver, StageSettings, StreamError,
};

/// Drives stages on the current task, awaiting input only while the stage
/// has an upstream request outstanding.
#[derive(Debug, Clone, Default)]
pub struct TokioStageDriver {
  settings: StageSettings,
}

impl TokioStageDriver {
  /// Creates a driver using the provided runner settings.
  #[must_use]
  pub const fn new(settings: StageSettings) -> Self {
    Self { settings }
  }

  /// Returns the runner settings.
  #[must_use]
  pub const fn settings(&self) -> &StageSettings {
    &self.settings
  }

  /// Runs `stage` until it emitted its first element.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::EmptyStream`] when the stage completed without an
  /// element, or the failure propagated through the stage.
  pub async fn run_head<G, In, Out>(
    &self,
    stage: &G,
    input: Receiver<Result<In, StreamError>>,
  ) -> Result<Out, StreamError>
  where
    G: GraphStage<In, Out> + ?Sized, {
    let sink = HeadSink::new();
    let completion = sink.completion();
    self.run(stage, input, sink).await?;
    completion.try_take().unwrap_or(Err(StreamError::EmptyStream))
  }

  /// Runs `stage` to completion and collects every emitted element.
  ///
  /// # Errors
  ///
  /// Returns the failure propagated through the stage.
  pub async fn run_collect<G, In, Out>(
    &self,
    stage: &G,
    input: Receiver<Result<In, StreamError>>,
  ) -> Result<Vec<Out>, StreamError>
  where
    G: GraphStage<In, Out> + ?Sized, {
    let sink = SeqSink::new();
    let completion = sink.completion();
    self.run(stage, input, sink).await?;
    completion.try_take().unwrap_or(Err(StreamError::EmptyStream))
  }

  async fn run<G, In, Out, K>(
    &self,
    stage: &G,
    input: Receiver<Result<In, StreamError>>,
    sink: K,
  ) -> Result<(), StreamError>
  where
    G: GraphStage<In, Out> + ?Sized,
    K: DownstreamSink<Out>, {
    let mut driver = StageDriver::new(stage, ChannelSource::new(input), sink, self.settings.clone());
    driver.start()?;
    loop {
      let outcome = driver.drive()?;
      if driver.is_finished() {
        debug!(target: LOG_TARGET, stage = self.settings.name(), state = ?driver.runner().state(), "stage drained");
        return Ok(());
      }
      if driver.source().is_waiting() {
        driver.source_mut().wait().await;
      } else if outcome == DriveOutcome::Idle {
        return Err(StreamError::WouldBlock);
      }
    }
  }
}

use super::{CancellationCause, StreamError};

/// External event queued for dispatch into a stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEvent<In> {
  /// Upstream delivered an element.
  UpstreamPush(In),
  /// Upstream finished normally.
  UpstreamFinish,
  /// Upstream failed.
  UpstreamFailure(StreamError),
  /// Downstream requested one element.
  DownstreamPull,
  /// Downstream cancelled.
  DownstreamCancel(CancellationCause),
}

impl<In> StageEvent<In> {
  /// Returns a short label used in log records.
  #[must_use]
  pub const fn label(&self) -> &'static str {
    match self {
      | Self::UpstreamPush(_) => "upstream_push",
      | Self::UpstreamFinish => "upstream_finish",
      | Self::UpstreamFailure(_) => "upstream_failure",
      | Self::DownstreamPull => "downstream_pull",
      | Self::DownstreamCancel(_) => "downstream_cancel",
    }
  }
}

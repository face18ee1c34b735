use super::FuzzAction;
use crate::core::{InletState, OutletState, StreamState};

/// Snapshot taken after one fuzz action was fully dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzStep {
  /// Injected event.
  pub action:               FuzzAction,
  /// Stage lifecycle state afterwards.
  pub state:                StreamState,
  /// Inlet state afterwards.
  pub inlet:                InletState,
  /// Outlet state afterwards.
  pub outlet:               OutletState,
  /// Upstream requests not yet answered.
  pub outstanding_requests: usize,
  /// Downstream pulls not yet answered.
  pub open_demand:          usize,
}

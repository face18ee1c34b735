use alloc::{boxed::Box, vec::Vec};

use super::StageRunner;
use crate::core::{
  CancellationCause, DownstreamSignal, DriveOutcome, FlowShape, GraphStage, GraphStageLogic, InletState,
  OutletState, ProtocolViolation, StageContext, StageEvent, StageSettings, StreamError, StreamState, UpstreamSignal,
};

struct DoubleStage;

impl GraphStage<u32, u32> for DoubleStage {
  fn shape(&self) -> FlowShape<u32, u32> {
    FlowShape::named("Double.in", "Double.out")
  }

  fn create_logic(&self) -> Box<dyn GraphStageLogic<u32, u32>> {
    Box::new(DoubleLogic)
  }
}

struct DoubleLogic;

impl GraphStageLogic<u32, u32> for DoubleLogic {
  fn on_pull(&mut self, ctx: &mut dyn StageContext<u32, u32>) -> Result<(), StreamError> {
    ctx.pull()
  }

  fn on_push(&mut self, ctx: &mut dyn StageContext<u32, u32>) -> Result<(), StreamError> {
    let value = ctx.grab()?;
    ctx.push(value * 2)
  }
}

/// Pushes on every element regardless of demand and ignores the error.
struct EagerLogic;

impl GraphStageLogic<u32, u32> for EagerLogic {
  fn on_start(&mut self, ctx: &mut dyn StageContext<u32, u32>) -> Result<(), StreamError> {
    ctx.pull()
  }

  fn on_pull(&mut self, _ctx: &mut dyn StageContext<u32, u32>) -> Result<(), StreamError> {
    Ok(())
  }

  fn on_push(&mut self, ctx: &mut dyn StageContext<u32, u32>) -> Result<(), StreamError> {
    let value = ctx.grab()?;
    let _ = ctx.push(value);
    Ok(())
  }
}

/// Emits every element twice, relying on deferred emission.
struct TwiceLogic;

impl GraphStageLogic<u32, u32> for TwiceLogic {
  fn on_pull(&mut self, ctx: &mut dyn StageContext<u32, u32>) -> Result<(), StreamError> {
    ctx.pull()
  }

  fn on_push(&mut self, ctx: &mut dyn StageContext<u32, u32>) -> Result<(), StreamError> {
    let value = ctx.grab()?;
    ctx.emit(value)?;
    ctx.emit(value)
  }
}

fn runner(stage: &dyn GraphStage<u32, u32>) -> StageRunner<u32, u32> {
  let mut runner = StageRunner::new(stage, StageSettings::new().with_name("test"));
  runner.start().expect("start");
  runner
}

fn runner_with(logic: Box<dyn GraphStageLogic<u32, u32>>) -> StageRunner<u32, u32> {
  let shape = FlowShape::named("Probe.in", "Probe.out");
  let mut runner = StageRunner::from_logic(shape, logic, StageSettings::new());
  runner.start().expect("start");
  runner
}

fn upstream(runner: &mut StageRunner<u32, u32>) -> Vec<UpstreamSignal> {
  core::iter::from_fn(|| runner.poll_upstream_signal()).collect()
}

fn downstream(runner: &mut StageRunner<u32, u32>) -> Vec<DownstreamSignal<u32>> {
  core::iter::from_fn(|| runner.poll_downstream_signal()).collect()
}

#[test]
fn start_is_rejected_twice() {
  let mut runner = runner(&DoubleStage);
  assert_eq!(runner.state(), StreamState::Running);
  assert_eq!(runner.start(), Err(StreamError::AlreadyStarted));
}

#[test]
fn drive_is_idle_before_start() {
  let mut runner = StageRunner::new(&DoubleStage, StageSettings::default());
  runner.on_downstream_pull().expect("offer");
  assert_eq!(runner.drive(), DriveOutcome::Idle);
  assert!(runner.has_pending_events());
}

#[test]
fn pull_through_round_trip() {
  let mut runner = runner(&DoubleStage);
  runner.on_downstream_pull().expect("pull");
  runner.run_until_idle();
  assert_eq!(upstream(&mut runner), vec![UpstreamSignal::Request]);
  assert_eq!(runner.inlet_state(), InletState::AwaitingData);
  assert_eq!(runner.outlet_state(), OutletState::Demanded);

  runner.on_upstream_push(21).expect("push");
  runner.run_until_idle();
  assert_eq!(downstream(&mut runner), vec![DownstreamSignal::Push(42)]);
  assert_eq!(runner.inlet_state(), InletState::Idle);
  assert_eq!(runner.outlet_state(), OutletState::Idle);
}

#[test]
fn upstream_finish_completes_by_default() {
  let mut runner = runner(&DoubleStage);
  runner.on_downstream_pull().expect("pull");
  runner.on_upstream_finish().expect("finish");
  runner.run_until_idle();
  assert_eq!(runner.state(), StreamState::Completed);
  assert!(runner.is_stopped());
  assert_eq!(downstream(&mut runner), vec![DownstreamSignal::Complete]);
  // upstream terminated itself, so only the initial request went out
  assert_eq!(upstream(&mut runner), vec![UpstreamSignal::Request]);
}

#[test]
fn upstream_failure_is_propagated_verbatim() {
  let mut runner = runner(&DoubleStage);
  runner.on_upstream_failure(StreamError::failed("disk gone")).expect("fail");
  runner.run_until_idle();
  assert_eq!(runner.state(), StreamState::Failed);
  assert_eq!(downstream(&mut runner), vec![DownstreamSignal::Fail(StreamError::failed("disk gone"))]);
  assert!(upstream(&mut runner).is_empty());
}

#[test]
fn downstream_cancel_releases_upstream() {
  let mut runner = runner(&DoubleStage);
  runner.on_downstream_pull().expect("pull");
  runner.run_until_idle();
  let _ = upstream(&mut runner);

  runner.on_downstream_cancel(CancellationCause::NoMoreElementsNeeded).expect("cancel");
  runner.run_until_idle();
  assert_eq!(runner.state(), StreamState::Cancelled);
  assert_eq!(upstream(&mut runner), vec![UpstreamSignal::Cancel(CancellationCause::NoMoreElementsNeeded)]);
  assert!(downstream(&mut runner).is_empty());

  // the pending request crosses the cancellation and is dropped
  runner.on_upstream_push(1).expect("late push");
  runner.run_until_idle();
  assert!(downstream(&mut runner).is_empty());
  assert!(upstream(&mut runner).is_empty());
}

#[test]
fn push_without_request_fails_the_stage() {
  let mut runner = runner(&DoubleStage);
  runner.on_upstream_push(1).expect("push");
  runner.run_until_idle();
  let violation =
    StreamError::ProtocolViolation { port: "Double.in", violation: ProtocolViolation::DeliveryWithoutRequest };
  assert_eq!(runner.state(), StreamState::Failed);
  assert_eq!(downstream(&mut runner), vec![DownstreamSignal::Fail(violation.clone())]);
  assert_eq!(upstream(&mut runner), vec![UpstreamSignal::Cancel(CancellationCause::Failed(violation))]);
}

#[test]
fn double_demand_fails_the_stage() {
  let mut runner = runner(&DoubleStage);
  runner.on_downstream_pull().expect("pull");
  runner.on_downstream_pull().expect("pull");
  runner.run_until_idle();
  assert_eq!(runner.state(), StreamState::Failed);
  let signals = downstream(&mut runner);
  assert!(matches!(
    signals.as_slice(),
    [DownstreamSignal::Fail(StreamError::ProtocolViolation { violation: ProtocolViolation::DemandWhileDemanded, .. })]
  ));
}

#[test]
fn ignored_emit_violation_still_fails_the_stage() {
  let mut runner = runner_with(Box::new(EagerLogic));
  assert_eq!(upstream(&mut runner), vec![UpstreamSignal::Request]);
  runner.on_upstream_push(5).expect("push");
  runner.run_until_idle();
  assert_eq!(runner.state(), StreamState::Failed);
  let signals = downstream(&mut runner);
  assert!(matches!(
    signals.as_slice(),
    [DownstreamSignal::Fail(StreamError::ProtocolViolation { violation: ProtocolViolation::EmitWithoutDemand, .. })]
  ));
}

#[test]
fn deferred_emissions_wait_for_demand() {
  let mut runner = runner_with(Box::new(TwiceLogic));
  runner.on_downstream_pull().expect("pull");
  runner.run_until_idle();
  runner.on_upstream_push(3).expect("push");
  runner.run_until_idle();
  assert_eq!(downstream(&mut runner), vec![DownstreamSignal::Push(3)]);
  assert_eq!(runner.pending_emissions(), 1);

  runner.on_upstream_finish().expect("finish");
  runner.run_until_idle();
  assert_eq!(runner.state(), StreamState::Finishing);
  assert!(downstream(&mut runner).is_empty());

  runner.on_downstream_pull().expect("pull");
  runner.run_until_idle();
  assert_eq!(downstream(&mut runner), vec![DownstreamSignal::Push(3), DownstreamSignal::Complete]);
  assert_eq!(runner.state(), StreamState::Completed);
}

#[test]
fn events_after_termination_are_dropped() {
  let mut runner = runner(&DoubleStage);
  runner.on_upstream_finish().expect("finish");
  runner.run_until_idle();
  assert_eq!(runner.offer(StageEvent::DownstreamPull), Ok(()));
  assert!(!runner.has_pending_events());
  assert_eq!(runner.drive(), DriveOutcome::Idle);
}

#[test]
fn event_queue_is_bounded() {
  let mut runner = StageRunner::new(&DoubleStage, StageSettings::new().with_event_queue_capacity(1));
  runner.on_downstream_pull().expect("first");
  assert_eq!(runner.on_downstream_pull(), Err(StreamError::EventQueueFull));
}

#[test]
fn drive_respects_dispatch_budget() {
  let mut runner = StageRunner::new(&DoubleStage, StageSettings::new().with_max_dispatch_per_drive(1));
  runner.start().expect("start");
  runner.on_downstream_pull().expect("pull");
  runner.on_upstream_finish().expect("finish");
  assert_eq!(runner.drive(), DriveOutcome::Progressed);
  assert!(runner.has_pending_events());
  assert_eq!(runner.drive(), DriveOutcome::Progressed);
  assert_eq!(runner.state(), StreamState::Completed);
}

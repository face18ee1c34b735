use alloc::{boxed::Box, vec::Vec};

use crate::core::{
  FlowShape, GraphStageLogic, StageContext, StageRunner, StageSettings, StreamError,
  testing::{FuzzAction, FuzzStep, StreamFuzzRunner, TestSinkProbe, TestSourceProbe},
};

struct PassThrough;

impl GraphStageLogic<u32, u32> for PassThrough {
  fn on_pull(&mut self, ctx: &mut dyn StageContext<u32, u32>) -> Result<(), StreamError> {
    ctx.pull()
  }

  fn on_push(&mut self, ctx: &mut dyn StageContext<u32, u32>) -> Result<(), StreamError> {
    let value = ctx.grab()?;
    ctx.push(value)
  }
}

fn run(seed: u64, steps: usize) -> (Vec<FuzzStep>, TestSourceProbe, TestSinkProbe<u32>) {
  let shape = FlowShape::named("PassThrough.in", "PassThrough.out");
  let mut runner = StageRunner::from_logic(shape, Box::new(PassThrough), StageSettings::default());
  runner.start().expect("start");
  let mut source = TestSourceProbe::new();
  let mut sink = TestSinkProbe::new();
  let trace = StreamFuzzRunner::new(seed).run_stage(&mut runner, &mut source, &mut sink, steps, |v| v).expect("run");
  (trace, source, sink)
}

#[test]
fn same_seed_yields_same_trace() {
  let (trace_a, _, sink_a) = run(42, 512);
  let (trace_b, _, sink_b) = run(42, 512);
  assert_eq!(trace_a, trace_b);
  assert_eq!(sink_a.received(), sink_b.received());
}

#[test]
fn pass_through_keeps_demand_balanced() {
  for seed in 0..64 {
    let (trace, source, sink) = run(seed, 1024);
    assert!(trace.iter().all(|step| step.outstanding_requests <= step.open_demand), "seed {seed}");
    assert_eq!(source.overlapping_requests(), 0, "seed {seed}");
    assert_eq!(source.requests_after_cancel(), 0, "seed {seed}");
    assert_eq!(sink.unrequested_pushes(), 0, "seed {seed}");
    assert!(sink.terminal_signals() <= 1, "seed {seed}");
  }
}

#[test]
fn pushed_values_arrive_in_order() {
  let (trace, _, sink) = run(7, 1024);
  let pushed: Vec<u32> = trace
    .iter()
    .filter_map(|step| match step.action {
      | FuzzAction::Push(value) => Some(value),
      | _ => None,
    })
    .collect();
  assert_eq!(sink.received(), pushed.as_slice());
}

#[test]
fn stopped_stage_leaves_the_source_terminated() {
  let mut stopped = 0_usize;
  for seed in 0..64 {
    let shape = FlowShape::named("PassThrough.in", "PassThrough.out");
    let mut runner = StageRunner::from_logic(shape, Box::new(PassThrough), StageSettings::default());
    runner.start().expect("start");
    let mut source = TestSourceProbe::new();
    let mut sink = TestSinkProbe::new();
    StreamFuzzRunner::new(seed).run_stage(&mut runner, &mut source, &mut sink, 1024, |v| v).expect("run");
    if runner.is_stopped() {
      stopped += 1;
      assert!(source.is_terminated(), "seed {seed}");
    }
  }
  assert!(stopped > 0);
}

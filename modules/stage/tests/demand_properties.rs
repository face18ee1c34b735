use fraktor_stage_rs::core::{
  DigestAccumulator, DigestAlgorithm, DigestCalculator, StageRunner, StageSettings,
  testing::{FuzzAction, FuzzStep, StreamFuzzRunner, TestSinkProbe, TestSourceProbe},
};

const SEEDS: u64 = 256;
const STEPS: usize = 2048;

fn chunk(value: u32) -> Vec<u8> {
  value.to_le_bytes()[..(value % 4) as usize + 1].to_vec()
}

struct Run {
  trace:  Vec<FuzzStep>,
  source: TestSourceProbe,
  sink:   TestSinkProbe<Vec<u8>>,
  runner: StageRunner<Vec<u8>, Vec<u8>>,
}

fn fuzz(seed: u64) -> Run {
  let stage = DigestCalculator::new(DigestAlgorithm::Sha256);
  let mut runner = StageRunner::new(&stage, StageSettings::new().with_name("digest-fuzz"));
  runner.start().expect("start");
  let mut source = TestSourceProbe::new();
  let mut sink = TestSinkProbe::new();
  let trace = StreamFuzzRunner::new(seed).run_stage(&mut runner, &mut source, &mut sink, STEPS, chunk).expect("fuzz");
  Run { trace, source, sink, runner }
}

#[test]
fn requests_never_exceed_open_demand() {
  for seed in 0..SEEDS {
    let run = fuzz(seed);
    for step in &run.trace {
      assert!(step.outstanding_requests <= step.open_demand, "seed {seed}: {step:?}");
      assert!(step.outstanding_requests <= 1, "seed {seed}: {step:?}");
    }
  }
}

#[test]
fn no_emission_without_demand() {
  for seed in 0..SEEDS {
    assert_eq!(fuzz(seed).sink.unrequested_pushes(), 0, "seed {seed}");
  }
}

#[test]
fn no_request_while_one_is_outstanding() {
  for seed in 0..SEEDS {
    assert_eq!(fuzz(seed).source.overlapping_requests(), 0, "seed {seed}");
  }
}

#[test]
fn no_request_after_cancellation() {
  let mut cancelled_runs = 0;
  for seed in 0..SEEDS {
    let run = fuzz(seed);
    if run.sink.is_cancelled() {
      cancelled_runs += 1;
      assert!(run.sink.received().is_empty(), "seed {seed}");
    }
    assert_eq!(run.source.requests_after_cancel(), 0, "seed {seed}");
  }
  assert!(cancelled_runs > 0);
}

#[test]
fn failure_never_emits_a_partial_digest() {
  let mut failed_runs = 0;
  for seed in 0..SEEDS {
    let run = fuzz(seed);
    if run.sink.failure().is_some() {
      failed_runs += 1;
      assert!(run.sink.received().is_empty(), "seed {seed}");
      assert!(!run.sink.is_completed(), "seed {seed}");
    }
  }
  assert!(failed_runs > 0);
}

#[test]
fn completed_runs_emit_the_digest_of_every_pushed_chunk() {
  let mut completed_runs = 0;
  for seed in 0..SEEDS {
    let run = fuzz(seed);
    if !run.sink.is_completed() {
      continue;
    }
    completed_runs += 1;
    let mut expected = DigestAccumulator::new(DigestAlgorithm::Sha256);
    for step in &run.trace {
      if let FuzzAction::Push(value) = step.action {
        expected.update_bytes(&chunk(value));
      }
    }
    assert_eq!(run.sink.received(), [expected.finalize()].as_slice(), "seed {seed}");
  }
  assert!(completed_runs > 0);
}

#[test]
fn stopped_stages_signal_exactly_one_outcome() {
  for seed in 0..SEEDS {
    let run = fuzz(seed);
    assert!(run.sink.terminal_signals() <= 1, "seed {seed}");
    if run.runner.is_stopped() && !run.sink.is_cancelled() {
      assert_eq!(run.sink.terminal_signals(), 1, "seed {seed}");
    }
  }
}

#[test]
fn fuzz_traces_are_reproducible() {
  assert_eq!(fuzz(99).trace, fuzz(99).trace);
}

//! Test utilities for stage verification.

mod fuzz_action;
mod fuzz_step;
mod stream_fuzz_runner;
mod test_sink_probe;
mod test_source_probe;

pub use fuzz_action::FuzzAction;
pub use fuzz_step::FuzzStep;
pub use stream_fuzz_runner::StreamFuzzRunner;
pub use test_sink_probe::TestSinkProbe;
pub use test_source_probe::TestSourceProbe;

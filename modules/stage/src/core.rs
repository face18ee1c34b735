/// Accumulating stage logic.
mod accumulate_logic;
/// Reaction set of an accumulating stage.
mod accumulate_phase;
/// Accumulating stage definition.
mod accumulate_stage;
/// Accumulator trait.
mod accumulator;
/// Cancellation causes.
mod cancellation_cause;
/// Completion polling types.
mod completion;
/// Demand model types.
mod demand;
/// Demand tracking utilities.
mod demand_tracker;
/// Running digest accumulator.
mod digest_accumulator;
/// Digest algorithm selection.
mod digest_algorithm;
/// Digest calculator stage.
mod digest_calculator;
/// Drive outcome enums.
mod drive_outcome;
/// Downstream signals.
mod downstream_signal;
/// Downstream sink trait.
mod downstream_sink;
/// Flow shape definition.
mod flow_shape;
/// Closure-based accumulator.
mod fold_accumulator;
/// Graph stage abstractions.
mod graph_stage;
/// Graph stage logic abstractions.
mod graph_stage_logic;
/// Head sink.
mod head_sink;
/// Typed inlet ports.
mod inlet;
/// Inlet state machine.
mod inlet_port;
/// Inlet states.
mod inlet_state;
/// Typed outlet ports.
mod outlet;
/// Outlet state machine.
mod outlet_port;
/// Outlet states.
mod outlet_state;
/// Port direction.
mod port_direction;
/// Port identifier type.
mod port_id;
/// Protocol violations.
mod protocol_violation;
/// Sequence sink.
mod seq_sink;
/// Sequence source.
mod seq_source;
/// Sink decisions.
mod sink_decision;
/// Source signals.
mod source_signal;
/// Stage execution context.
mod stage_context;
/// Synchronous stage driver.
mod stage_driver;
/// Inbound stage events.
mod stage_event;
/// Stage runner.
mod stage_runner;
/// Stage runner configuration.
mod stage_settings;
/// Stream completion handle.
mod stream_completion;
/// Stream error definitions.
mod stream_error;
/// Stream state enum.
mod stream_state;
/// Testing utilities.
pub mod testing;
/// Upstream signals.
mod upstream_signal;
/// Upstream source trait.
mod upstream_source;

pub use accumulate_logic::AccumulateLogic;
pub use accumulate_phase::AccumulatePhase;
pub use accumulate_stage::AccumulateStage;
pub use accumulator::Accumulator;
pub use cancellation_cause::CancellationCause;
pub use completion::Completion;
pub use demand::Demand;
pub use demand_tracker::DemandTracker;
pub use digest_accumulator::DigestAccumulator;
pub use digest_algorithm::DigestAlgorithm;
pub use digest_calculator::DigestCalculator;
pub use downstream_signal::DownstreamSignal;
pub use downstream_sink::DownstreamSink;
pub use drive_outcome::DriveOutcome;
pub use flow_shape::FlowShape;
pub use fold_accumulator::FoldAccumulator;
pub use graph_stage::GraphStage;
pub use graph_stage_logic::GraphStageLogic;
pub use head_sink::HeadSink;
pub use inlet::Inlet;
pub use inlet_port::InletPort;
pub use inlet_state::InletState;
pub use outlet::Outlet;
pub use outlet_port::OutletPort;
pub use outlet_state::OutletState;
pub use port_direction::PortDirection;
pub use port_id::PortId;
pub use protocol_violation::ProtocolViolation;
pub use seq_sink::SeqSink;
pub use seq_source::SeqSource;
pub use sink_decision::SinkDecision;
pub use source_signal::SourceSignal;
pub use stage_context::StageContext;
pub use stage_driver::StageDriver;
pub use stage_event::StageEvent;
pub(crate) use stage_runner::LOG_TARGET;
pub use stage_runner::StageRunner;
pub use stage_settings::StageSettings;
pub use stream_completion::StreamCompletion;
pub use stream_error::StreamError;
pub use stream_state::StreamState;
pub use upstream_signal::UpstreamSignal;
pub use upstream_source::UpstreamSource;

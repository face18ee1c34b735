/// Channel-backed upstream source.
mod channel_source;
/// Tokio-based stage driver.
mod tokio_stage_driver;

pub use channel_source::ChannelSource;
pub use tokio_stage_driver::TokioStageDriver;

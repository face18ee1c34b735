//! Hashes the command-line arguments as a stream of chunks.
//!
//! Usage: `digest_calculator_std [ALGORITHM] [CHUNK]...`

use fraktor_stage_rs::{
  core::{DigestCalculator, StageSettings, StreamError},
  std::TokioStageDriver,
};
use tokio::sync::mpsc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), StreamError> {
  let mut args = std::env::args().skip(1);
  let stage = DigestCalculator::from_name(&args.next().unwrap_or_else(|| String::from("SHA-256")))?;
  let chunks: Vec<Vec<u8>> = args.map(String::into_bytes).collect();

  let (tx, rx) = mpsc::channel(2);
  let producer = tokio::spawn(async move {
    for chunk in chunks {
      if tx.send(Ok(chunk)).await.is_err() {
        break;
      }
    }
  });

  let driver = TokioStageDriver::new(StageSettings::new().with_name("digest-example"));
  let digest = driver.run_head(&stage, rx).await?;
  let _ = producer.await;

  let hex: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
  println!("{}: {hex}", stage.algorithm());
  Ok(())
}

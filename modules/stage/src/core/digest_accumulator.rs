//! Running message digest.

mod digest_hasher;
#[cfg(test)]
mod tests;

use alloc::vec::Vec;
use core::fmt;

use digest_hasher::DigestHasher;

use super::{Accumulator, DigestAlgorithm, StreamError};

/// Accumulator hashing byte chunks with the selected algorithm.
///
/// Chunk boundaries do not affect the result: the digest of `["ab", "c"]`
/// equals the digest of `["abc"]`.
#[derive(Clone)]
pub struct DigestAccumulator {
  algorithm: DigestAlgorithm,
  hasher:    DigestHasher,
  processed: u64,
}

impl DigestAccumulator {
  /// Creates an accumulator with an empty running hash.
  #[must_use]
  pub fn new(algorithm: DigestAlgorithm) -> Self {
    Self { algorithm, hasher: DigestHasher::new(algorithm), processed: 0 }
  }

  /// Returns the selected algorithm.
  #[must_use]
  pub const fn algorithm(&self) -> DigestAlgorithm {
    self.algorithm
  }

  /// Returns the number of bytes hashed so far.
  #[must_use]
  pub const fn bytes_processed(&self) -> u64 {
    self.processed
  }

  /// Hashes one chunk.
  pub fn update_bytes(&mut self, chunk: &[u8]) {
    self.hasher.update(chunk);
    self.processed = self.processed.saturating_add(chunk.len() as u64);
  }

  /// Consumes the accumulator and returns the digest bytes.
  #[must_use]
  pub fn finalize(self) -> Vec<u8> {
    self.hasher.finalize()
  }
}

impl fmt::Debug for DigestAccumulator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DigestAccumulator")
      .field("algorithm", &self.algorithm)
      .field("processed", &self.processed)
      .finish_non_exhaustive()
  }
}

impl<In> Accumulator<In> for DigestAccumulator
where
  In: AsRef<[u8]>,
{
  type Output = Vec<u8>;

  fn update(&mut self, element: In) -> Result<(), StreamError> {
    self.update_bytes(element.as_ref());
    Ok(())
  }

  fn finish(self) -> Vec<u8> {
    self.finalize()
  }
}

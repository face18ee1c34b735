use alloc::vec::Vec;

use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::core::DigestAlgorithm;

#[derive(Clone)]
pub(super) enum DigestHasher {
  Sha224(Sha224),
  Sha256(Sha256),
  Sha384(Sha384),
  Sha512(Sha512),
}

impl DigestHasher {
  pub(super) fn new(algorithm: DigestAlgorithm) -> Self {
    match algorithm {
      | DigestAlgorithm::Sha224 => Self::Sha224(Sha224::new()),
      | DigestAlgorithm::Sha256 => Self::Sha256(Sha256::new()),
      | DigestAlgorithm::Sha384 => Self::Sha384(Sha384::new()),
      | DigestAlgorithm::Sha512 => Self::Sha512(Sha512::new()),
    }
  }

  pub(super) fn update(&mut self, data: &[u8]) {
    match self {
      | Self::Sha224(hasher) => hasher.update(data),
      | Self::Sha256(hasher) => hasher.update(data),
      | Self::Sha384(hasher) => hasher.update(data),
      | Self::Sha512(hasher) => hasher.update(data),
    }
  }

  pub(super) fn finalize(self) -> Vec<u8> {
    match self {
      | Self::Sha224(hasher) => hasher.finalize().to_vec(),
      | Self::Sha256(hasher) => hasher.finalize().to_vec(),
      | Self::Sha384(hasher) => hasher.finalize().to_vec(),
      | Self::Sha512(hasher) => hasher.finalize().to_vec(),
    }
  }
}

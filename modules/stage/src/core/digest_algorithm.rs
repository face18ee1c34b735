//! Supported digest algorithms.


use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

use super::StreamError;

/// Hash algorithm computed by a [`DigestCalculator`](super::DigestCalculator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigestAlgorithm {
  /// SHA-224.
  Sha224,
  /// SHA-256.
  #[default]
  Sha256,
  /// SHA-384.
  Sha384,
  /// SHA-512.
  Sha512,
}

impl DigestAlgorithm {
  /// Returns the standard algorithm name.
  #[must_use]
  pub const fn name(&self) -> &'static str {
    match self {
      | Self::Sha224 => "SHA-224",
      | Self::Sha256 => "SHA-256",
      | Self::Sha384 => "SHA-384",
      | Self::Sha512 => "SHA-512",
    }
  }

  /// Returns the digest length in bytes.
  #[must_use]
  pub const fn output_len(&self) -> usize {
    match self {
      | Self::Sha224 => 28,
      | Self::Sha256 => 32,
      | Self::Sha384 => 48,
      | Self::Sha512 => 64,
    }
  }
}

impl fmt::Display for DigestAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for DigestAlgorithm {
  type Err = StreamError;

  /// Parses names such as `SHA-256`, `sha256` or `Sha_512`.
  fn from_str(value: &str) -> Result<Self, Self::Err> {
    let normalized: String =
      value.trim().chars().filter(|c| !matches!(c, '-' | '_')).map(|c| c.to_ascii_uppercase()).collect();
    match normalized.as_str() {
      | "SHA224" => Ok(Self::Sha224),
      | "SHA256" => Ok(Self::Sha256),
      | "SHA384" => Ok(Self::Sha384),
      | "SHA512" => Ok(Self::Sha512),
      | _ => Err(StreamError::UnsupportedAlgorithm(value.to_string())),
    }
  }
}

use alloc::vec::Vec;

use super::DigestAccumulator;
use crate::core::{Accumulator, DigestAlgorithm};

const SHA256_ABC: [u8; 32] = [
  0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3,
  0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00, 0x15, 0xad,
];

fn digest_of(algorithm: DigestAlgorithm, chunks: &[&[u8]]) -> Vec<u8> {
  let mut acc = DigestAccumulator::new(algorithm);
  for chunk in chunks {
    acc.update_bytes(chunk);
  }
  acc.finalize()
}

#[test]
fn sha256_of_abc_matches_reference() {
  assert_eq!(digest_of(DigestAlgorithm::Sha256, &[b"abc"]), SHA256_ABC.to_vec());
}

#[test]
fn chunking_does_not_change_the_digest() {
  let whole = digest_of(DigestAlgorithm::Sha256, &[b"abc"]);
  assert_eq!(digest_of(DigestAlgorithm::Sha256, &[b"ab", b"c"]), whole);
  assert_eq!(digest_of(DigestAlgorithm::Sha256, &[b"a", b"", b"b", b"c"]), whole);
}

#[test]
fn output_length_follows_the_algorithm() {
  for algorithm in [DigestAlgorithm::Sha224, DigestAlgorithm::Sha256, DigestAlgorithm::Sha384, DigestAlgorithm::Sha512] {
    assert_eq!(digest_of(algorithm, &[b"abc"]).len(), algorithm.output_len());
  }
}

#[test]
fn accumulator_impl_accepts_owned_chunks() {
  let mut acc = DigestAccumulator::new(DigestAlgorithm::Sha256);
  Accumulator::<Vec<u8>>::update(&mut acc, b"ab".to_vec()).expect("update");
  Accumulator::<Vec<u8>>::update(&mut acc, b"c".to_vec()).expect("update");
  assert_eq!(acc.bytes_processed(), 3);
  assert_eq!(Accumulator::<Vec<u8>>::finish(acc), SHA256_ABC.to_vec());
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! BLAKE2b digests and the base-32 alphabet used by the address format.
use blake2b_simd::Params;
use data_encoding::{Encoding, Specification};
use once_cell::sync::Lazy;

use crate::address::constants::{CHECKSUM_HASH_LEN, PAYLOAD_HASH_LEN};

/// Lower-case RFC 4648 base-32 without padding.
pub(crate) static ADDRESS_ENCODING: Lazy<Encoding> = Lazy::new(|| {
    let mut spec = Specification::new();
    spec.symbols.push_str("abcdefghijklmnopqrstuvwxyz234567");
    // Only fails on a malformed specification which is fixed at compile time
    spec.encoding().unwrap()
});

fn blake2b<const N: usize>(data: &[u8]) -> [u8; N] {
    let digest = Params::new().hash_length(N).hash(data);
    let mut out = [0u8; N];
    out.copy_from_slice(digest.as_bytes());
    out
}

/// 160-bit BLAKE2b digest used as payload of `Secp256k1` and `Actor` addresses.
pub fn payload_hash(data: &[u8]) -> [u8; PAYLOAD_HASH_LEN] {
    blake2b::<PAYLOAD_HASH_LEN>(data)
}

/// 4-byte BLAKE2b checksum over `data`, usually the protocol tag followed by the payload.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_HASH_LEN] {
    blake2b::<CHECKSUM_HASH_LEN>(data)
}

/// Returns true if `expected` is the checksum of `data`.
pub fn validate_checksum(data: &[u8], expected: &[u8]) -> bool {
    checksum(data).as_slice() == expected
}

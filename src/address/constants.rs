// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sizes and limits of the address format.

/// Length of the hash taken over `Secp256k1` and `Actor` payloads.
pub const PAYLOAD_HASH_LEN: usize = 20;

/// Length of the checksum appended to payloads in string form.
pub const CHECKSUM_HASH_LEN: usize = 4;

/// Length of a BLS public key.
pub const BLS_PUBLIC_KEY_LEN: usize = 48;

/// Length of a BLS private key.
pub const BLS_PRIVATE_KEY_LEN: usize = 32;

/// Maximum number of decimal digits of an actor id.
pub const MAX_ID_STRING_LEN: usize = 19;

/// Largest actor id, ids are bounded by the signed 64-bit range.
pub const MAX_ID: u64 = i64::MAX as u64;

/// Maximum length of a hierarchical payload.
///
/// Largest payload whose base-32 encoding, together with its checksum, still fits into
/// [`MAX_ADDRESS_STRING_LEN`].
pub const MAX_HIERARCHICAL_PAYLOAD_LEN: usize = 139;

/// Maximum length of an address encoded as a string.
///
/// Network prefix, protocol digit and the base-32 encoding of the largest hierarchical payload
/// together with its checksum.
pub const MAX_ADDRESS_STRING_LEN: usize = 232;

/// Minimum length of an address encoded as a string.
pub const MIN_ADDRESS_STRING_LEN: usize = 2;

/// String representing the undefined address.
pub const UNDEF_ADDRESS_STRING: &str = "<empty>";

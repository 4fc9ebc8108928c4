// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Error types for `Address` and `SubnetId` encoding and decoding.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
    /// Network prefix character is neither `f` nor `t`.
    #[error("unknown address network")]
    UnknownNetwork,

    /// Protocol tag or digit is outside of the known protocols.
    #[error("unknown address protocol")]
    UnknownProtocol,

    /// Payload violates the shape required by its protocol.
    #[error("invalid address payload")]
    InvalidPayload,

    /// Input is shorter or longer than allowed.
    #[error("invalid address length")]
    InvalidLength,

    /// Recomputed checksum does not match the embedded one.
    #[error("invalid address checksum")]
    InvalidChecksum,

    /// Malformed base-32 text or subnet path.
    #[error("invalid encoding")]
    InvalidEncoding,

    /// Operation is only available on hierarchical addresses.
    #[error("not hierarchical address")]
    NotHierarchical,
}

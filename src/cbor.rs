// SPDX-License-Identifier: MIT OR Apache-2.0

//! Utility methods to encode or decode addresses and subnet ids in [CBOR] format.
//!
//! Ledgers storing these identifiers inside larger records use the Concise Binary Object
//! Representation (CBOR). Addresses are encoded as byte strings of their binary form, subnet ids
//! as the tuple `(parent, actor)`.
//!
//! [CBOR]: https://cbor.io/
use std::io::Read;

use ciborium::de::Error as DeserializeError;
use ciborium::ser::Error as SerializeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Encodes an address, a subnet id or any record holding them into CBOR.
pub fn encode_cbor<T: Serialize>(value: &T) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = Vec::new();
    ciborium::ser::into_writer(value, &mut bytes)?;
    Ok(bytes)
}

/// Decodes a CBOR value, validating every address and subnet id it contains.
pub fn decode_cbor<T: for<'a> Deserialize<'a>, R: Read>(reader: R) -> Result<T, DecodeError> {
    Ok(ciborium::from_reader::<T, R>(reader)?)
}

/// Failure while writing CBOR.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The underlying writer failed.
    #[error("could not write cbor: {0}")]
    Io(std::io::Error),

    /// The value has no CBOR representation.
    #[error("could not serialize value to cbor: {0}")]
    Value(String),
}

impl From<SerializeError<std::io::Error>> for EncodeError {
    fn from(value: SerializeError<std::io::Error>) -> Self {
        match value {
            SerializeError::Io(err) => EncodeError::Io(err),
            SerializeError::Value(err) => EncodeError::Value(err),
        }
    }
}

/// Failure while reading CBOR.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The underlying reader failed or ended early.
    #[error("could not read cbor: {0}")]
    Io(std::io::Error),

    /// The input is not well-formed CBOR, with the offset of the offending byte.
    #[error("malformed cbor at offset {0}")]
    Syntax(usize),

    /// The input is well-formed CBOR but does not describe a valid value, for example a byte
    /// string with an unknown protocol tag, a bad checksum or a subnet path not rooted at
    /// `/root`.
    ///
    /// Holds the offset of the rejected item if known and the address error message.
    #[error("invalid value at offset {0:?}: {1}")]
    Semantic(Option<usize>, String),

    /// The input nests deeper than the decoder allows.
    #[error("cbor nesting too deep")]
    RecursionLimitExceeded,
}

impl From<DeserializeError<std::io::Error>> for DecodeError {
    fn from(value: DeserializeError<std::io::Error>) -> Self {
        match value {
            DeserializeError::Io(err) => DecodeError::Io(err),
            DeserializeError::Syntax(offset) => DecodeError::Syntax(offset),
            DeserializeError::Semantic(offset, description) => {
                DecodeError::Semantic(offset, description)
            }
            DeserializeError::RecursionLimitExceeded => DecodeError::RecursionLimitExceeded,
        }
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use crate::address::error::AddressError;

/// Identity kind of an address.
///
/// The declaration order defines both the binary tag and the digit used in string form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Protocol {
    /// Numeric handle assigned by the ledger.
    Id,

    /// Hash of a secp256k1 public key.
    Secp256k1,

    /// Hash of actor-specific init data.
    Actor,

    /// Raw BLS public key.
    Bls,

    /// Plain address scoped to a subnet.
    Hierarchical,
}

impl Protocol {
    /// Binary tag of this protocol.
    pub const fn to_byte(self) -> u8 {
        match self {
            Protocol::Id => 0,
            Protocol::Secp256k1 => 1,
            Protocol::Actor => 2,
            Protocol::Bls => 3,
            Protocol::Hierarchical => 4,
        }
    }

    /// Looks up a protocol by its binary tag.
    pub fn from_byte(tag: u8) -> Result<Self, AddressError> {
        match tag {
            0 => Ok(Protocol::Id),
            1 => Ok(Protocol::Secp256k1),
            2 => Ok(Protocol::Actor),
            3 => Ok(Protocol::Bls),
            4 => Ok(Protocol::Hierarchical),
            _ => Err(AddressError::UnknownProtocol),
        }
    }

    /// ASCII digit used for this protocol in string form.
    pub const fn to_char(self) -> char {
        (b'0' + self.to_byte()) as char
    }

    /// Looks up a protocol by its string digit.
    pub fn from_char(digit: char) -> Result<Self, AddressError> {
        let tag = digit.to_digit(10).ok_or(AddressError::UnknownProtocol)?;
        Self::from_byte(u8::try_from(tag).map_err(|_| AddressError::UnknownProtocol)?)
    }
}

impl TryFrom<u8> for Protocol {
    type Error = AddressError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_byte(tag)
    }
}

impl From<Protocol> for u8 {
    fn from(protocol: Protocol) -> Self {
        protocol.to_byte()
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

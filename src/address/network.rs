// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use log::debug;

use crate::address::error::AddressError;

/// Network an address string is meant for.
///
/// Only affects the leading character of the string form, never the binary form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Network {
    /// Production network, prefix `f`.
    #[default]
    Mainnet,

    /// Test network, prefix `t`.
    Testnet,
}

impl Network {
    /// Leading character of addresses encoded for this network.
    pub const fn prefix(self) -> char {
        match self {
            Network::Mainnet => 'f',
            Network::Testnet => 't',
        }
    }

    /// Looks up a network by its address prefix character.
    pub fn from_prefix(prefix: char) -> Result<Self, AddressError> {
        match prefix {
            'f' => Ok(Network::Mainnet),
            't' => Ok(Network::Testnet),
            _ => Err(AddressError::UnknownNetwork),
        }
    }

    const fn to_u8(self) -> u8 {
        match self {
            Network::Mainnet => 0,
            Network::Testnet => 1,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Network::Testnet,
            _ => Network::Mainnet,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

/// Parses `"mainnet"` / `"testnet"` or the bare prefix characters.
impl FromStr for Network {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" | "f" => Ok(Network::Mainnet),
            "testnet" | "t" => Ok(Network::Testnet),
            _ => Err(AddressError::UnknownNetwork),
        }
    }
}

static CURRENT_NETWORK: AtomicU8 = AtomicU8::new(Network::Mainnet.to_u8());

/// Returns the network used when addresses are formatted with `Display`.
pub fn current_network() -> Network {
    Network::from_u8(CURRENT_NETWORK.load(Ordering::Acquire))
}

/// Switches the network used when addresses are formatted with `Display`.
///
/// This is process-wide. Set it once during startup; use [`crate::Address::encode`] to format for
/// a specific network without touching the global.
pub fn set_current_network(network: Network) {
    let previous = Network::from_u8(CURRENT_NETWORK.swap(network.to_u8(), Ordering::AcqRel));
    if previous != network {
        debug!("Switching address network from {} to {}", previous, network);
    }
}

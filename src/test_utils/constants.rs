// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed addresses derived from well-known seeds.
use once_cell::sync::Lazy;

use crate::address::Address;

/// Seed of [`TEST_ADDRESS`].
pub const TEST_ADDRESS_SEED: &[u8] = b"satoshi";

/// Seed of [`TEST_ADDRESS_2`].
pub const TEST_ADDRESS_2_SEED: &[u8] = b"nakamoto";

/// An account address with some initial funds in it.
pub static TEST_ADDRESS: Lazy<Address> = Lazy::new(|| Address::new_actor(TEST_ADDRESS_SEED));

/// A second account address with some initial funds in it.
pub static TEST_ADDRESS_2: Lazy<Address> = Lazy::new(|| Address::new_actor(TEST_ADDRESS_2_SEED));

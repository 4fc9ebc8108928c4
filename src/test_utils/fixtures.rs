// SPDX-License-Identifier: MIT OR Apache-2.0

//! `rstest` fixtures which can be injected into tests.
//!
//! ## Example
//!
//! ```
//! # #[cfg(test)]
//! # mod tests {
//! use rstest::rstest;
//!
//! use hierarchical_address::test_utils::fixtures::{id_address, subnet};
//! use hierarchical_address::{Address, SubnetId};
//!
//! #[rstest]
//! fn scoped_address(subnet: SubnetId, id_address: Address) {
//!     assert!(Address::new_hierarchical(&subnet, &id_address).is_ok());
//! }
//! # }
//! ```
use rstest::fixture;

use crate::address::Address;
use crate::subnet::SubnetId;

/// `Id` address of actor 1000.
#[fixture]
pub fn id_address(#[default(1000)] id: u64) -> Address {
    Address::from_id(id).unwrap()
}

/// `Secp256k1` address hashed from a fixed 65 byte public key.
#[fixture]
pub fn secp_address(#[default(vec![4; 65])] public_key: Vec<u8>) -> Address {
    Address::new_secp256k1(&public_key)
}

/// `Actor` address hashed from fixed init data.
#[fixture]
pub fn actor_address(#[default(b"actor".to_vec())] data: Vec<u8>) -> Address {
    Address::new_actor(&data)
}

/// `Bls` address of a fixed 48 byte public key.
#[fixture]
pub fn bls_address(#[default(vec![7; 48])] public_key: Vec<u8>) -> Address {
    Address::from_bls_key(&public_key).unwrap()
}

/// Two levels below the root: `/root/f0101/f0102`.
#[fixture]
pub fn subnet() -> SubnetId {
    let level_1 = SubnetId::new(&SubnetId::root(), Address::from_id(101).unwrap());
    SubnetId::new(&level_1, Address::from_id(102).unwrap())
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compact, self-describing actor addresses for ledger systems.
//!
//! An [`Address`] is a protocol tag followed by a protocol-specific payload. It has a binary form
//! for storage and a checksummed, human-typeable string form (`f1...`, `t01000`) for user
//! interfaces. On top of that, [`SubnetId`] names a node in a tree of nested subnets and
//! hierarchical addresses embed such a subnet together with a plain address.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use hierarchical_address::{Address, Network, SubnetId};
//!
//! let id = Address::from_id(1000)?;
//! assert_eq!(id.encode(Network::Mainnet), "f01000");
//!
//! let subnet = SubnetId::new(&SubnetId::root(), Address::from_id(101)?);
//! let address = Address::new_hierarchical(&subnet, &id)?;
//! assert_eq!(address.subnet()?, subnet);
//! assert_eq!(address.raw_addr()?, id);
//! # Ok(())
//! # }
//! ```
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

pub mod address;
pub mod cbor;
mod serde;
pub mod subnet;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use address::{
    current_network, set_current_network, Address, AddressError, Network, Protocol,
};
pub use subnet::SubnetId;

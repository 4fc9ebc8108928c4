// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binary and string codec for actor addresses.
mod address;
mod checksum;
pub mod constants;
mod error;
mod hierarchical;
mod network;
mod protocol;

pub use address::Address;
pub use checksum::{checksum, payload_hash, validate_checksum};
pub use error::AddressError;
pub use network::{current_network, set_current_network, Network};
pub use protocol::Protocol;

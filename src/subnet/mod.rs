// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identifiers of nodes in a tree of nested subnets.
//!
//! A subnet is named by the path of subnet actor addresses leading to it from the root, for
//! example `/root/f0101/f0102`. Levels are kept as addresses, the network prefix of every level
//! is chosen when the path is encoded.
mod subnet_id;

pub use subnet_id::SubnetId;

/// String form of the root subnet.
pub const ROOT_STR: &str = "/root";

/// Separator between the levels of a subnet path.
pub const SUBNET_SEPARATOR: char = '/';

/// String form of the undefined subnet.
pub const UNDEF_STR: &str = "/";

/// Separator between subnet path and raw address in pretty-printed hierarchical addresses.
pub const HC_ADDR_SEPARATOR: char = ':';

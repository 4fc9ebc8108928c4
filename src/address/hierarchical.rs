// SPDX-License-Identifier: MIT OR Apache-2.0

//! Addresses scoped to a subnet.
//!
//! The payload of a hierarchical address is the varint encoded length of the subnet path,
//! followed by the subnet path string and the binary form of a plain address:
//!
//! ```text
//! varint(len(path)) ++ path ++ raw address bytes
//! ```
//!
//! The path is always written with mainnet prefixes, so the binary form of a hierarchical address
//! does not depend on the selected network.
use log::debug;

use crate::address::constants::MAX_HIERARCHICAL_PAYLOAD_LEN;
use crate::address::error::AddressError;
use crate::address::network::{current_network, Network};
use crate::address::protocol::Protocol;
use crate::address::Address;
use crate::subnet::{SubnetId, HC_ADDR_SEPARATOR};

/// Splits a hierarchical payload into the subnet path and the raw address bytes.
fn split_hierarchical_payload(payload: &[u8]) -> Result<(&str, &[u8]), AddressError> {
    let (path_len, rest) =
        unsigned_varint::decode::usize(payload).map_err(|_| AddressError::InvalidPayload)?;
    if path_len > rest.len() {
        return Err(AddressError::InvalidPayload);
    }

    let (path, raw) = rest.split_at(path_len);
    let path = std::str::from_utf8(path).map_err(|_| AddressError::InvalidPayload)?;
    Ok((path, raw))
}

/// Checks that a payload decoded from bytes or a string is a well-formed hierarchical payload.
pub(crate) fn validate_hierarchical_payload(payload: &[u8]) -> Result<(), AddressError> {
    if payload.len() > MAX_HIERARCHICAL_PAYLOAD_LEN {
        return Err(AddressError::InvalidPayload);
    }

    let (path, raw) = split_hierarchical_payload(payload)?;
    let subnet = path
        .parse::<SubnetId>()
        .map_err(|_| AddressError::InvalidPayload)?;
    if subnet.encode(Network::Mainnet) != path {
        return Err(AddressError::InvalidPayload);
    }

    let raw = Address::from_bytes(raw).map_err(|_| AddressError::InvalidPayload)?;
    if raw.protocol() == Some(Protocol::Hierarchical) {
        return Err(AddressError::InvalidPayload);
    }

    Ok(())
}

impl Address {
    /// Scopes a plain address to a subnet.
    ///
    /// Fails if `raw` is undefined or itself hierarchical, if `subnet` is not below the root or if
    /// the result would exceed the maximum hierarchical payload size.
    pub fn new_hierarchical(subnet: &SubnetId, raw: &Address) -> Result<Self, AddressError> {
        match raw.protocol() {
            None | Some(Protocol::Hierarchical) => {
                debug!("Refusing to scope address {:?} to subnet {}", raw, subnet);
                return Err(AddressError::InvalidPayload);
            }
            Some(_) => (),
        }

        let path = subnet.encode(Network::Mainnet);
        let mut len_buf = unsigned_varint::encode::usize_buffer();
        let len = unsigned_varint::encode::usize(path.len(), &mut len_buf);

        let mut payload = Vec::with_capacity(len.len() + path.len() + raw.to_bytes().len());
        payload.extend_from_slice(len);
        payload.extend_from_slice(path.as_bytes());
        payload.extend(raw.to_bytes());
        validate_hierarchical_payload(&payload)?;

        Ok(Address::from_hierarchical_payload(payload))
    }

    /// Subnet a hierarchical address is scoped to.
    pub fn subnet(&self) -> Result<SubnetId, AddressError> {
        if self.protocol() != Some(Protocol::Hierarchical) {
            return Err(AddressError::NotHierarchical);
        }

        let payload = self.payload();
        let (path, _) = split_hierarchical_payload(&payload)?;
        path.parse()
    }

    /// Address without subnet context.
    ///
    /// Non-hierarchical addresses are returned unchanged.
    pub fn raw_addr(&self) -> Result<Address, AddressError> {
        if self.protocol() != Some(Protocol::Hierarchical) {
            return Ok(self.clone());
        }

        let payload = self.payload();
        let (_, raw) = split_hierarchical_payload(&payload)?;
        Address::from_bytes(raw)
    }

    /// Human-readable form, `<subnet>:<raw address>` for hierarchical addresses and the ordinary
    /// string form for all others.
    pub fn pretty_print(&self) -> Result<String, AddressError> {
        self.pretty_print_with(current_network())
    }

    /// Same as [`Address::pretty_print`] for an explicit network.
    pub fn pretty_print_with(&self, network: Network) -> Result<String, AddressError> {
        if self.protocol() != Some(Protocol::Hierarchical) {
            return Ok(self.encode(network));
        }

        Ok(format!(
            "{}{}{}",
            self.subnet()?.encode(network),
            HC_ADDR_SEPARATOR,
            self.raw_addr()?.encode(network)
        ))
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::address::{current_network, Address, AddressError, Network};
use crate::subnet::{ROOT_STR, SUBNET_SEPARATOR, UNDEF_STR};

/// Identifier of a subnet.
///
/// Made of the path of the parent subnet and the address of the subnet actor which governs this
/// subnet inside its parent. Two sentinels exist: the root subnet (`/root`) and the undefined
/// subnet (`/`), both carrying the id-address of actor 0.
///
/// The parent path is kept as addresses, so the network prefix only appears once a subnet id is
/// encoded as a string. Equality, hashing and the tree operations do not depend on the network.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubnetId {
    /// Actors of the subnets from the root down to the parent, `None` if not below the root.
    parent: Option<Vec<Address>>,
    actor: Address,
}

impl SubnetId {
    /// The root subnet.
    pub fn root() -> Self {
        Self {
            parent: Some(Vec::new()),
            actor: Address::ID_ZERO,
        }
    }

    /// The undefined subnet.
    pub fn undef() -> Self {
        Self {
            parent: None,
            actor: Address::ID_ZERO,
        }
    }

    /// Creates the id of a child subnet governed by `actor` inside `parent`.
    pub fn new(parent: &SubnetId, actor: Address) -> Self {
        Self {
            parent: parent.path(),
            actor,
        }
    }

    /// Creates a subnet id from its parent path and actor, checking that the parent is a valid
    /// subnet path.
    pub fn from_parts(parent: &str, actor: Address) -> Result<Self, AddressError> {
        if actor.is_undefined() {
            return Err(AddressError::InvalidPayload);
        }

        if parent == UNDEF_STR && actor == Address::ID_ZERO {
            return Ok(Self::undef());
        }

        Ok(Self {
            parent: Some(parse_parent(parent)?),
            actor,
        })
    }

    /// Subnet at the end of a path of actors below the root.
    fn from_path(path: &[Address]) -> Self {
        match path.split_last() {
            None => Self::root(),
            Some((actor, parent)) => Self {
                parent: Some(parent.to_vec()),
                actor: actor.clone(),
            },
        }
    }

    /// Returns true if this is the root subnet.
    pub fn is_root(&self) -> bool {
        self.parent.as_ref().is_some_and(Vec::is_empty) && self.actor == Address::ID_ZERO
    }

    /// Returns true if this is the undefined subnet.
    pub fn is_undef(&self) -> bool {
        self.parent.is_none() && self.actor == Address::ID_ZERO
    }

    /// Path of the parent subnet with its actors encoded for the given network.
    pub fn encode_parent(&self, network: Network) -> String {
        match &self.parent {
            None => UNDEF_STR.to_string(),
            Some(levels) => {
                let mut path = ROOT_STR.to_string();
                for actor in levels {
                    path.push(SUBNET_SEPARATOR);
                    path.push_str(&actor.encode(network));
                }
                path
            }
        }
    }

    /// Id of the parent subnet, the undefined subnet for the root.
    pub fn get_parent(&self) -> Result<SubnetId, AddressError> {
        if self.is_root() {
            return Ok(Self::undef());
        }

        self.encode_parent(Network::Mainnet).parse()
    }

    /// Stored actor, including the actor 0 of the sentinels.
    pub(crate) fn actor(&self) -> &Address {
        &self.actor
    }

    /// Address of the actor governing this subnet in its parent, undefined for the root.
    pub fn get_actor(&self) -> Address {
        if self.is_root() {
            return Address::UNDEF;
        }

        self.actor.clone()
    }

    /// Actors of the subnets from the root down to this one, `None` if not below the root.
    fn path(&self) -> Option<Vec<Address>> {
        if self.is_root() {
            return Some(Vec::new());
        }

        self.parent.as_ref().map(|levels| {
            let mut path = levels.clone();
            path.push(self.actor.clone());
            path
        })
    }

    /// Number of levels of this subnet, `/root` being level 1 and the undefined subnet level 0.
    pub fn levels(&self) -> usize {
        self.path().map_or(0, |path| path.len() + 1)
    }

    /// String form with subnet actors encoded for the given network.
    pub fn encode(&self, network: Network) -> String {
        if self.is_root() {
            ROOT_STR.to_string()
        } else if self.is_undef() {
            UNDEF_STR.to_string()
        } else if self.parent.is_none() {
            format!("{}{}", SUBNET_SEPARATOR, self.actor.encode(network))
        } else {
            format!(
                "{}{}{}",
                self.encode_parent(network),
                SUBNET_SEPARATOR,
                self.actor.encode(network)
            )
        }
    }

    /// Deepest subnet shared by `self` and `other`, with its number of levels.
    ///
    /// Returns the undefined subnet and 0 if either of them is not below the root.
    pub fn common_parent(&self, other: &SubnetId) -> (SubnetId, usize) {
        let (Some(own), Some(other)) = (self.path(), other.path()) else {
            return (Self::undef(), 0);
        };

        let shared = own
            .iter()
            .zip(other.iter())
            .take_while(|(a, b)| a == b)
            .count();
        (Self::from_path(&own[..shared]), shared + 1)
    }

    /// Child of `curr` on the path from `curr` down to `self`.
    ///
    /// Returns the undefined subnet if `curr` is not a strict ancestor of `self`.
    pub fn down(&self, curr: &SubnetId) -> SubnetId {
        let (Some(own), Some(other)) = (self.path(), curr.path()) else {
            return Self::undef();
        };

        if other.len() >= own.len() || !own.starts_with(&other) {
            return Self::undef();
        }

        Self::from_path(&own[..=other.len()])
    }

    /// Parent of the deepest subnet shared by `self` and `curr`, walking up towards the root.
    ///
    /// Returns the undefined subnet if `curr` is deeper than `self`, or if the only subnet they
    /// share is the root.
    pub fn up(&self, curr: &SubnetId) -> SubnetId {
        let (Some(own), Some(other)) = (self.path(), curr.path()) else {
            return Self::undef();
        };

        if other.len() > own.len() {
            return Self::undef();
        }

        let (_, levels) = self.common_parent(curr);
        match levels.checked_sub(2) {
            Some(len) => Self::from_path(&own[..len]),
            None => Self::undef(),
        }
    }
}

/// A parent path is `/root` followed by any number of address segments.
///
/// Actor 0 is reserved for the sentinels and can not appear inside a parent path.
fn parse_parent(parent: &str) -> Result<Vec<Address>, AddressError> {
    if parent == ROOT_STR {
        return Ok(Vec::new());
    }

    let levels = parent
        .strip_prefix(ROOT_STR)
        .and_then(|rest| rest.strip_prefix(SUBNET_SEPARATOR))
        .ok_or(AddressError::InvalidEncoding)?;

    levels
        .split(SUBNET_SEPARATOR)
        .map(|segment| {
            let actor = segment.parse::<Address>()?;
            if actor == Address::ID_ZERO {
                return Err(AddressError::InvalidPayload);
            }
            Ok(actor)
        })
        .collect()
}

impl Default for SubnetId {
    fn default() -> Self {
        Self::undef()
    }
}

impl fmt::Display for SubnetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode(current_network()))
    }
}

impl FromStr for SubnetId {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROOT_STR => return Ok(Self::root()),
            UNDEF_STR => return Ok(Self::undef()),
            "" => return Err(AddressError::InvalidLength),
            _ => (),
        }

        let (parent, actor) = s
            .rsplit_once(SUBNET_SEPARATOR)
            .ok_or(AddressError::InvalidEncoding)?;
        let actor: Address = actor.parse()?;

        Self::from_parts(parent, actor)
    }
}

impl TryFrom<&str> for SubnetId {
    type Error = AddressError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

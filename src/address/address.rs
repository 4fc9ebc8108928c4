// SPDX-License-Identifier: MIT OR Apache-2.0

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::address::checksum::{checksum, payload_hash, validate_checksum, ADDRESS_ENCODING};
use crate::address::constants::{
    BLS_PUBLIC_KEY_LEN, CHECKSUM_HASH_LEN, MAX_ADDRESS_STRING_LEN, MAX_ID, MAX_ID_STRING_LEN,
    MIN_ADDRESS_STRING_LEN, PAYLOAD_HASH_LEN, UNDEF_ADDRESS_STRING,
};
use crate::address::error::AddressError;
use crate::address::hierarchical::validate_hierarchical_payload;
use crate::address::network::{current_network, Network};
use crate::address::protocol::Protocol;

/// Protocol-specific content of an address.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
enum Payload {
    #[default]
    Undefined,
    Id(u64),
    Secp256k1([u8; PAYLOAD_HASH_LEN]),
    Actor([u8; PAYLOAD_HASH_LEN]),
    Bls([u8; BLS_PUBLIC_KEY_LEN]),
    /// Validated `varint(len) ++ subnet path ++ raw address bytes`.
    Hierarchical(Vec<u8>),
}

/// Identifier of an actor.
///
/// Binary form is the protocol tag followed by the payload, string form is the network prefix,
/// the protocol digit and either the decimal id or the base-32 encoded payload with a checksum.
///
/// The default value is the undefined address. It has no protocol, an empty binary form and is
/// never produced by any decoder.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Address(Payload);

impl Address {
    /// The undefined address.
    pub const UNDEF: Address = Address(Payload::Undefined);

    /// `Id` address of actor 0, the actor of the root and undefined subnet sentinels.
    pub(crate) const ID_ZERO: Address = Address(Payload::Id(0));

    /// Creates an `Id` address for the given actor id.
    pub fn from_id(id: u64) -> Result<Self, AddressError> {
        if id > MAX_ID {
            return Err(AddressError::InvalidPayload);
        }

        Ok(Self(Payload::Id(id)))
    }

    /// Creates a `Secp256k1` or `Actor` address by hashing `data` into its payload.
    pub fn from_payload_hash(protocol: Protocol, data: &[u8]) -> Result<Self, AddressError> {
        let hash = payload_hash(data);

        match protocol {
            Protocol::Secp256k1 => Ok(Self(Payload::Secp256k1(hash))),
            Protocol::Actor => Ok(Self(Payload::Actor(hash))),
            Protocol::Id | Protocol::Bls | Protocol::Hierarchical => {
                Err(AddressError::InvalidPayload)
            }
        }
    }

    /// Creates a `Secp256k1` address from a serialized public key.
    pub fn new_secp256k1(public_key: &[u8]) -> Self {
        Self(Payload::Secp256k1(payload_hash(public_key)))
    }

    /// Creates an `Actor` address from actor-specific init data.
    pub fn new_actor(data: &[u8]) -> Self {
        Self(Payload::Actor(payload_hash(data)))
    }

    /// Creates a `Bls` address from a 48 byte public key.
    pub fn from_bls_key(public_key: &[u8]) -> Result<Self, AddressError> {
        let key: [u8; BLS_PUBLIC_KEY_LEN] = public_key
            .try_into()
            .map_err(|_| AddressError::InvalidPayload)?;
        Ok(Self(Payload::Bls(key)))
    }

    /// Decodes an address from its binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        let (tag, payload) = bytes.split_first().ok_or(AddressError::InvalidLength)?;
        let protocol = Protocol::from_byte(*tag)?;

        if payload.is_empty() {
            return Err(AddressError::InvalidLength);
        }

        Self::from_protocol_payload(protocol, payload)
    }

    /// Wraps an already validated hierarchical payload.
    pub(crate) fn from_hierarchical_payload(payload: Vec<u8>) -> Self {
        Self(Payload::Hierarchical(payload))
    }

    fn from_protocol_payload(protocol: Protocol, payload: &[u8]) -> Result<Self, AddressError> {
        match protocol {
            Protocol::Id => {
                let (id, rest) = unsigned_varint::decode::u64(payload)
                    .map_err(|_| AddressError::InvalidPayload)?;
                if !rest.is_empty() {
                    return Err(AddressError::InvalidPayload);
                }
                Self::from_id(id)
            }
            Protocol::Secp256k1 => Ok(Self(Payload::Secp256k1(fixed_payload(payload)?))),
            Protocol::Actor => Ok(Self(Payload::Actor(fixed_payload(payload)?))),
            Protocol::Bls => Ok(Self(Payload::Bls(fixed_payload(payload)?))),
            Protocol::Hierarchical => {
                validate_hierarchical_payload(payload)?;
                Ok(Self(Payload::Hierarchical(payload.to_vec())))
            }
        }
    }

    /// Protocol of this address, `None` if it is undefined.
    pub fn protocol(&self) -> Option<Protocol> {
        match &self.0 {
            Payload::Undefined => None,
            Payload::Id(_) => Some(Protocol::Id),
            Payload::Secp256k1(_) => Some(Protocol::Secp256k1),
            Payload::Actor(_) => Some(Protocol::Actor),
            Payload::Bls(_) => Some(Protocol::Bls),
            Payload::Hierarchical(_) => Some(Protocol::Hierarchical),
        }
    }

    /// Returns true if this is the undefined address.
    pub fn is_undefined(&self) -> bool {
        matches!(self.0, Payload::Undefined)
    }

    /// Actor id of an `Id` address.
    pub fn id(&self) -> Option<u64> {
        match self.0 {
            Payload::Id(id) => Some(id),
            _ => None,
        }
    }

    /// Payload bytes, excluding the protocol tag.
    pub fn payload(&self) -> Vec<u8> {
        match &self.0 {
            Payload::Undefined => Vec::new(),
            Payload::Id(id) => {
                let mut buf = unsigned_varint::encode::u64_buffer();
                unsigned_varint::encode::u64(*id, &mut buf).to_vec()
            }
            Payload::Secp256k1(hash) | Payload::Actor(hash) => hash.to_vec(),
            Payload::Bls(key) => key.to_vec(),
            Payload::Hierarchical(payload) => payload.clone(),
        }
    }

    /// Binary form: protocol tag followed by the payload. Empty for the undefined address.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.protocol() {
            None => Vec::new(),
            Some(protocol) => {
                let mut bytes = vec![protocol.to_byte()];
                bytes.extend(self.payload());
                bytes
            }
        }
    }

    /// String form for the given network.
    pub fn encode(&self, network: Network) -> String {
        let Some(protocol) = self.protocol() else {
            return UNDEF_ADDRESS_STRING.to_string();
        };

        let body = match self.0 {
            Payload::Id(id) => id.to_string(),
            _ => {
                let mut bytes = self.payload();
                bytes.extend_from_slice(&checksum(&self.to_bytes()));
                ADDRESS_ENCODING.encode(&bytes)
            }
        };

        format!("{}{}{}", network.prefix(), protocol.to_char(), body)
    }

    fn decode(value: &str) -> Result<Self, AddressError> {
        if value.len() < MIN_ADDRESS_STRING_LEN || value.len() > MAX_ADDRESS_STRING_LEN {
            return Err(AddressError::InvalidLength);
        }

        let mut chars = value.chars();
        chars
            .next()
            .ok_or(AddressError::InvalidLength)
            .and_then(Network::from_prefix)?;
        let protocol = chars
            .next()
            .ok_or(AddressError::InvalidLength)
            .and_then(Protocol::from_char)?;
        let raw = chars.as_str();

        if protocol == Protocol::Id {
            return Self::decode_id(raw);
        }

        let mut payload = ADDRESS_ENCODING
            .decode(raw.as_bytes())
            .map_err(|_| AddressError::InvalidEncoding)?;
        if payload.len() < CHECKSUM_HASH_LEN {
            return Err(AddressError::InvalidLength);
        }
        let sum = payload.split_off(payload.len() - CHECKSUM_HASH_LEN);

        let expected_len = match protocol {
            Protocol::Secp256k1 | Protocol::Actor => Some(PAYLOAD_HASH_LEN),
            Protocol::Bls => Some(BLS_PUBLIC_KEY_LEN),
            Protocol::Id | Protocol::Hierarchical => None,
        };
        if expected_len.is_some_and(|len| len != payload.len()) {
            return Err(AddressError::InvalidPayload);
        }

        let mut data = Vec::with_capacity(payload.len() + 1);
        data.push(protocol.to_byte());
        data.extend_from_slice(&payload);
        if !validate_checksum(&data, &sum) {
            trace!("Checksum mismatch decoding address {}", value);
            return Err(AddressError::InvalidChecksum);
        }

        Self::from_protocol_payload(protocol, &payload)
    }

    fn decode_id(raw: &str) -> Result<Self, AddressError> {
        if raw.len() > MAX_ID_STRING_LEN {
            return Err(AddressError::InvalidLength);
        }

        // Bare `f0` is the short form of actor 0
        if raw.is_empty() {
            return Ok(Self::ID_ZERO);
        }

        if !raw.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(AddressError::InvalidPayload);
        }

        // Decimal form must be canonical
        if raw.len() > 1 && raw.starts_with('0') {
            return Err(AddressError::InvalidPayload);
        }

        let id = raw
            .parse::<u64>()
            .map_err(|_| AddressError::InvalidPayload)?;
        Self::from_id(id)
    }
}

fn fixed_payload<const N: usize>(payload: &[u8]) -> Result<[u8; N], AddressError> {
    payload
        .try_into()
        .map_err(|_| AddressError::InvalidPayload)
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode(current_network()))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.protocol() {
            None => f.write_str("Address(<empty>)"),
            Some(protocol) => f
                .debug_struct("Address")
                .field("protocol", &protocol)
                .field("payload", &hex::encode(self.payload()))
                .finish(),
        }
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_bytes().cmp(&other.to_bytes())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::decode(value)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = AddressError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl From<&Address> for Vec<u8> {
    fn from(address: &Address) -> Self {
        address.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use crate::address::constants::{MAX_ID, UNDEF_ADDRESS_STRING};
    use crate::address::{AddressError, Network, Protocol};
    use crate::test_utils::constants::{TEST_ADDRESS, TEST_ADDRESS_2};
    use crate::subnet::SubnetId;
    use crate::test_utils::fixtures::{
        actor_address, bls_address, id_address, secp_address, subnet,
    };

    use super::Address;

    #[rstest]
    #[case(0, vec![0, 0])]
    #[case(1000, vec![0, 232, 7])]
    #[case(MAX_ID, vec![0, 255, 255, 255, 255, 255, 255, 255, 255, 127])]
    fn id_binary_form(#[case] id: u64, #[case] bytes: Vec<u8>) {
        let address = Address::from_id(id).unwrap();
        assert_eq!(address.to_bytes(), bytes);
        assert_eq!(address.id(), Some(id));
        assert_eq!(Address::from_bytes(&bytes).unwrap(), address);
    }

    #[test]
    fn id_out_of_range() {
        assert_eq!(
            Address::from_id(MAX_ID + 1),
            Err(AddressError::InvalidPayload)
        );
        assert_eq!(Address::from_id(u64::MAX), Err(AddressError::InvalidPayload));
    }

    #[rstest]
    #[case(0, "f00")]
    #[case(1, "f01")]
    #[case(1000, "f01000")]
    #[case(MAX_ID, "f09223372036854775807")]
    fn id_string_form(#[case] id: u64, #[case] expected: &str) {
        let address = Address::from_id(id).unwrap();
        assert_eq!(address.encode(Network::Mainnet), expected);
        assert_eq!(expected.parse::<Address>().unwrap(), address);
    }

    #[rstest]
    #[case::leading_zero("f0100", AddressError::InvalidPayload)]
    #[case::double_zero("f000", AddressError::InvalidPayload)]
    #[case::sign("f0+1", AddressError::InvalidPayload)]
    #[case::letters("f01a", AddressError::InvalidPayload)]
    #[case::above_i64("f09223372036854775808", AddressError::InvalidPayload)]
    #[case::too_many_digits("f012345678901234567890", AddressError::InvalidLength)]
    #[case::too_short("f", AddressError::InvalidLength)]
    #[case::empty_hash("f1", AddressError::InvalidLength)]
    #[case::empty("", AddressError::InvalidLength)]
    #[case::unknown_network("x01", AddressError::UnknownNetwork)]
    #[case::unknown_protocol("f91", AddressError::UnknownProtocol)]
    fn invalid_strings(#[case] value: &str, #[case] error: AddressError) {
        assert_eq!(value.parse::<Address>(), Err(error));
    }

    #[test]
    fn zero_id() {
        assert_eq!("f00".parse::<Address>(), Address::from_id(0));
        assert_eq!("t00".parse::<Address>(), Address::from_id(0));
        assert_eq!("f0".parse::<Address>(), Address::from_id(0));
        assert_eq!("t0".parse::<Address>(), Address::from_id(0));
        assert_eq!(Address::from_id(0).unwrap().encode(Network::Mainnet), "f00");
    }

    #[test]
    fn network_prefix() {
        let address = Address::from_id(1000).unwrap();
        assert_eq!(address.encode(Network::Testnet), "t01000");
        assert_eq!(
            "t01000".parse::<Address>().unwrap().to_bytes(),
            "f01000".parse::<Address>().unwrap().to_bytes()
        );
    }

    #[rstest]
    fn hashed_payloads(
        secp_address: Address,
        actor_address: Address,
        bls_address: Address,
    ) {
        assert_eq!(secp_address.protocol(), Some(Protocol::Secp256k1));
        assert_eq!(secp_address.payload().len(), 20);
        assert_eq!(secp_address.to_bytes().len(), 21);

        assert_eq!(actor_address.protocol(), Some(Protocol::Actor));
        assert_eq!(actor_address.payload().len(), 20);

        assert_eq!(bls_address.protocol(), Some(Protocol::Bls));
        assert_eq!(bls_address.to_bytes().len(), 49);
    }

    #[rstest]
    fn binary_round_trip(secp_address: Address, actor_address: Address, bls_address: Address) {
        for address in [secp_address, actor_address, bls_address] {
            assert_eq!(Address::from_bytes(&address.to_bytes()).unwrap(), address);
        }
    }

    #[rstest]
    fn string_round_trip(secp_address: Address, actor_address: Address, bls_address: Address) {
        for address in [secp_address, actor_address, bls_address] {
            for network in [Network::Mainnet, Network::Testnet] {
                let encoded = address.encode(network);
                assert!(encoded.starts_with(network.prefix()));
                assert_eq!(encoded.parse::<Address>().unwrap(), address);
            }
        }
    }

    #[test]
    fn payload_hash_constructor() {
        assert_eq!(
            Address::from_payload_hash(Protocol::Actor, b"satoshi").unwrap(),
            Address::new_actor(b"satoshi")
        );
        assert_eq!(
            Address::from_payload_hash(Protocol::Secp256k1, b"satoshi").unwrap(),
            Address::new_secp256k1(b"satoshi")
        );
        assert_ne!(Address::new_actor(b"satoshi"), Address::new_secp256k1(b"satoshi"));
        assert_eq!(
            Address::from_payload_hash(Protocol::Bls, b"satoshi"),
            Err(AddressError::InvalidPayload)
        );
    }

    #[test]
    fn bls_key_length() {
        assert!(Address::from_bls_key(&[7; 48]).is_ok());
        assert_eq!(
            Address::from_bls_key(&[7; 47]),
            Err(AddressError::InvalidPayload)
        );
        assert_eq!(
            Address::from_bls_key(&[7; 49]),
            Err(AddressError::InvalidPayload)
        );
    }

    #[rstest]
    #[case::empty(vec![], AddressError::InvalidLength)]
    #[case::tag_only(vec![1], AddressError::InvalidLength)]
    #[case::unknown_tag(vec![9, 1], AddressError::UnknownProtocol)]
    #[case::short_secp(vec![1; 20], AddressError::InvalidPayload)]
    #[case::long_actor(vec![2; 22], AddressError::InvalidPayload)]
    #[case::short_bls(vec![3; 48], AddressError::InvalidPayload)]
    #[case::id_missing_varint(vec![0], AddressError::InvalidLength)]
    #[case::id_not_minimal(vec![0, 0x81, 0x00], AddressError::InvalidPayload)]
    #[case::id_trailing_bytes(vec![0, 1, 2], AddressError::InvalidPayload)]
    #[case::id_above_i64(vec![0, 128, 128, 128, 128, 128, 128, 128, 128, 128, 1], AddressError::InvalidPayload)]
    fn invalid_bytes(#[case] bytes: Vec<u8>, #[case] error: AddressError) {
        assert_eq!(Address::from_bytes(&bytes), Err(error));
    }

    #[rstest]
    fn checksum_sensitivity(
        secp_address: Address,
        bls_address: Address,
        id_address: Address,
        subnet: SubnetId,
    ) {
        let hierarchical = Address::new_hierarchical(&subnet, &id_address).unwrap();
        for address in [secp_address, bls_address, TEST_ADDRESS.clone(), hierarchical] {
            let encoded = address.encode(Network::Mainnet);

            for position in 2..encoded.len() {
                let mut mutated = encoded.clone().into_bytes();
                mutated[position] = if mutated[position] == b'a' { b'b' } else { b'a' };
                let mutated = String::from_utf8(mutated).unwrap();

                let result = mutated.parse::<Address>();
                assert!(
                    matches!(
                        result,
                        Err(AddressError::InvalidChecksum) | Err(AddressError::InvalidEncoding)
                    ),
                    "{} decoded to {:?}",
                    mutated,
                    result
                );
            }
        }
    }

    #[test]
    fn checksum_too_short() {
        // "aa" decodes to a single byte
        assert_eq!("f1aa".parse::<Address>(), Err(AddressError::InvalidLength));
    }

    #[test]
    fn undefined() {
        let undef = Address::default();
        assert_eq!(undef, Address::UNDEF);
        assert!(undef.is_undefined());
        assert_eq!(undef.protocol(), None);
        assert_eq!(undef.id(), None);
        assert!(undef.to_bytes().is_empty());
        assert_eq!(undef.to_string(), UNDEF_ADDRESS_STRING);
        assert_eq!(
            UNDEF_ADDRESS_STRING.parse::<Address>(),
            Err(AddressError::UnknownNetwork)
        );
        assert_ne!(undef, Address::from_id(0).unwrap());
    }

    #[test]
    fn well_known_addresses() {
        assert_eq!(*TEST_ADDRESS, Address::new_actor(b"satoshi"));
        assert_eq!(*TEST_ADDRESS_2, Address::new_actor(b"nakamoto"));
        assert_ne!(*TEST_ADDRESS, *TEST_ADDRESS_2);
    }

    #[rstest]
    fn it_hashes(secp_address: Address) {
        let mut map = HashMap::new();
        map.insert(secp_address.clone(), "secp");
        map.insert(Address::from_id(5).unwrap(), "id");
        assert_eq!(map.get(&secp_address), Some(&"secp"));
        assert_eq!(map.get(&"f05".parse::<Address>().unwrap()), Some(&"id"));
    }

    #[test]
    fn ordering_follows_bytes() {
        let a = Address::from_id(1).unwrap();
        let b = Address::from_id(2).unwrap();
        let c = Address::new_actor(b"satoshi");
        assert!(a < b);
        assert!(b < c);
        assert!(Address::UNDEF < a);
    }

    #[test]
    fn debug_representation() {
        let address = Address::from_id(1000).unwrap();
        assert_eq!(
            format!("{:?}", address),
            "Address { protocol: Id, payload: \"e807\" }"
        );
        assert_eq!(format!("{:?}", Address::UNDEF), "Address(<empty>)");
    }
}

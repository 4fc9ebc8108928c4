// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize};
use serde_bytes::{ByteBuf as SerdeByteBuf, Bytes as SerdeBytes};

use crate::address::{current_network, Address, AddressError, Network};
use crate::subnet::SubnetId;

/// Serializes an address into its string form when using a human readable encoding (JSON),
/// otherwise into its binary form (CBOR).
impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            self.to_string().serialize(serializer)
        } else {
            SerdeBytes::new(&self.to_bytes()).serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let value = String::deserialize(deserializer)?;
            value
                .parse()
                .map_err(|err: AddressError| serde::de::Error::custom(err.to_string()))
        } else {
            let bytes = <SerdeByteBuf>::deserialize(deserializer)?;

            // Zero-value addresses are encoded as an empty byte string
            if bytes.is_empty() {
                return Ok(Address::UNDEF);
            }

            Address::from_bytes(&bytes)
                .map_err(|err: AddressError| serde::de::Error::custom(err.to_string()))
        }
    }
}

/// Serializes a subnet id as the tuple `(parent, actor)`.
///
/// Binary encodings always write the parent path with mainnet prefixes, human readable ones use
/// the current network like the actor address next to it.
impl Serialize for SubnetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let network = if serializer.is_human_readable() {
            current_network()
        } else {
            Network::Mainnet
        };

        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.encode_parent(network))?;
        tuple.serialize_element(self.actor())?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for SubnetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (parent, actor) = <(String, Address)>::deserialize(deserializer)?;

        SubnetId::from_parts(&parent, actor)
            .map_err(|err: AddressError| serde::de::Error::custom(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::address::{Address, Network};
    use crate::cbor::{decode_cbor, encode_cbor};
    use crate::subnet::SubnetId;

    #[test]
    fn address_cbor() {
        let address = Address::from_id(1000).unwrap();
        let bytes = encode_cbor(&address).unwrap();
        assert_eq!(bytes, vec![67, 0, 232, 7]);
        assert_eq!(decode_cbor::<Address, _>(&bytes[..]).unwrap(), address);
    }

    #[test]
    fn undefined_address_cbor() {
        let bytes = encode_cbor(&Address::UNDEF).unwrap();
        assert_eq!(bytes, vec![64]);
        assert_eq!(
            decode_cbor::<Address, _>(&bytes[..]).unwrap(),
            Address::UNDEF
        );
    }

    #[test]
    fn invalid_address_cbor() {
        let bytes = encode_cbor(&serde_bytes::Bytes::new(&[9, 1])).unwrap();
        assert!(decode_cbor::<Address, _>(&bytes[..]).is_err());
    }

    #[test]
    fn address_json() {
        let address = Address::from_id(1000).unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", address));
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), address);

        assert!(serde_json::from_str::<Address>("\"f0100\"").is_err());
    }

    #[test]
    fn subnet_cbor() {
        let bytes = encode_cbor(&SubnetId::root()).unwrap();
        assert_eq!(bytes, vec![130, 101, 47, 114, 111, 111, 116, 66, 0, 0]);

        let net = SubnetId::new(&SubnetId::root(), Address::from_id(101).unwrap());
        let bytes = encode_cbor(&net).unwrap();
        assert_eq!(decode_cbor::<SubnetId, _>(&bytes[..]).unwrap(), net);
    }

    #[test]
    fn nested_subnet_cbor() {
        let net: SubnetId = "/root/t0101/t0102".parse().unwrap();
        let bytes = encode_cbor(&net).unwrap();
        assert_eq!(
            bytes,
            encode_cbor(&"/root/f0101/f0102".parse::<SubnetId>().unwrap()).unwrap()
        );

        // Parent path is written with mainnet prefixes
        let (parent, _): (String, Address) = decode_cbor(&bytes[..]).unwrap();
        assert_eq!(parent, "/root/f0101");
        assert_eq!(decode_cbor::<SubnetId, _>(&bytes[..]).unwrap(), net);
    }

    #[test]
    fn subnet_json() {
        let net = SubnetId::new(&SubnetId::root(), Address::from_id(101).unwrap());
        let json = serde_json::to_string(&net).unwrap();
        assert_eq!(
            json,
            format!("[\"/root\",\"{}\"]", Address::from_id(101).unwrap())
        );
        assert_eq!(serde_json::from_str::<SubnetId>(&json).unwrap(), net);
        assert_eq!(net.encode(Network::Mainnet), "/root/f0101");
    }

    #[test]
    fn invalid_subnet() {
        assert!(serde_json::from_str::<SubnetId>("[\"/nowhere\",\"f0101\"]").is_err());
        assert!(serde_json::from_str::<SubnetId>("[\"/root\",\"f0x\"]").is_err());
        assert!(serde_json::from_str::<SubnetId>("\"/root\"").is_err());
    }
}

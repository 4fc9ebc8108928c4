#![no_main]

use hierarchical_address::{Address, Network};

use libfuzzer_sys::fuzz_target;

fuzz_target!(|value: &str| {
    if let Ok(address) = value.parse::<Address>() {
        let network = Network::from_prefix(value.chars().next().unwrap()).unwrap();

        // The short form `f0` encodes as `f00`
        if value.len() > 2 {
            assert_eq!(address.encode(network), value);
        }
        assert_eq!(Address::from_bytes(&address.to_bytes()).unwrap(), address);
    }
});

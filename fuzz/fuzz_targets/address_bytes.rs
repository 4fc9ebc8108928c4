#![no_main]

use hierarchical_address::Address;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|bytes: &[u8]| {
    if let Ok(address) = Address::from_bytes(bytes) {
        assert_eq!(address.to_bytes(), bytes);

        let address_again: Address = address.to_string().parse().unwrap();
        assert_eq!(address, address_again);
    }
});

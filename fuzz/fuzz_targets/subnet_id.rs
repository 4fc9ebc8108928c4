#![no_main]

use hierarchical_address::{Address, SubnetId};

use libfuzzer_sys::fuzz_target;

fuzz_target!(|value: &str| {
    if let Ok(subnet) = value.parse::<SubnetId>() {
        let subnet_again: SubnetId = subnet.to_string().parse().unwrap();
        assert_eq!(subnet, subnet_again);

        if let Ok(parent) = subnet.get_parent() {
            assert!(parent.levels() < subnet.levels() || subnet.levels() == 0);
        }

        if let Ok(address) = Address::new_hierarchical(&subnet, &Address::from_id(1).unwrap()) {
            assert_eq!(address.subnet().unwrap(), subnet);
        }
    }
});

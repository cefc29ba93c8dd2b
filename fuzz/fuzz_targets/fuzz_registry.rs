#![no_main]

use convkit_engine::{Error, Operation, Registry};
use libfuzzer_sys::fuzz_target;

// Every operation of every converter must return, never panic
fuzz_target!(|input: &str| {
    for descriptor in Registry::global() {
        for operation in Operation::ALL {
            match descriptor.run(operation, input) {
                Err(Error::NotSupported { .. }) => assert!(!descriptor.supports(operation)),
                Ok(output) => {
                    let _ = output.to_display_string();
                }
                Err(_) => {}
            }
        }
    }
});

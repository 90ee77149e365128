//! Fuzz the type spec parser
//!
//! Exercises the lexer, the spec parser and diagnostic rendering.

#![no_main]

use libfuzzer_sys::fuzz_target;
use valtype::{parse_spec, ValueType};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let ty = ValueType::from_spec(input);
        // Anything that parses must print back to itself
        if !ty.is_error() {
            assert_eq!(ValueType::from_spec(&ty.to_spec()), ty);
        }

        if let Err(err) = parse_spec(input) {
            let _ = err.report(input, false);
        }
    }
});

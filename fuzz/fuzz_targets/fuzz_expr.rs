//! Fuzz type expression checking
//!
//! Runs the REPL pipeline on arbitrary input: parsing, inference,
//! checking and error reporting. It should never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use valtype::repl::{ReplConfig, ReplState};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let state = ReplState::new(ReplConfig { color: false });
        let _ = state.execute_expression(input);

        if let Ok(expr) = valtype::parse_expr(input) {
            let inferred = expr.infer();
            assert_eq!(expr.check().is_ok(), !inferred.is_error());
        }
    }
});

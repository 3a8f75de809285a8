//! Fuzz target for descriptor JSON loading.
//!
//! Tests that `load_from_str` handles arbitrary input without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use xm_descriptor::load_from_str;

fuzz_target!(|data: &str| {
    // The loader should never panic, only return an error
    let _ = load_from_str("fuzz", data);
});

//! Fuzz target for library entry splitting.
//!
//! `LibraryEntry::parse` is total; the resulting path is always a prefix
//! of the raw input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use xm_descriptor::LibraryEntry;

fuzz_target!(|data: &str| {
    let entry = LibraryEntry::parse(data);
    assert!(data.starts_with(&entry.path));
});

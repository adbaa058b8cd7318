//! Fuzz target for the import line scanner.
//!
//! Goal: The scanner should **never panic** on any input.
//! It may return nothing, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_import_scanner
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only test valid UTF-8 strings (source files must be UTF-8)
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = layerguard_scan::fuzz::scan_imports(text);
    }
});

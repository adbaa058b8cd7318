//! Fuzz target for manifest parsing and policy resolution.
//!
//! Goal: Parsing and resolution should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_manifests
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Parse both manifest kinds - should never panic
        let pkg = layerguard_settings::parse_package_manifest(text);
        let tsconfig = layerguard_settings::parse_tsconfig(text);

        // When both parse, resolution must not panic either
        if let (Ok(pkg), Ok(tsconfig)) = (pkg, tsconfig) {
            let _ = layerguard_settings::resolve_policy(&pkg, &tsconfig);
        }
    }
});

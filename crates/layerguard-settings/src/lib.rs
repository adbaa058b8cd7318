//! Manifest parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves the two
//! declarative manifests (`package.json`, `tsconfig.json`) provided as
//! strings, validates the policy document against its schema, and produces
//! the immutable compiled config the engine consumes.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{CompilerOptions, ElementDef, PackageManifest, PolicyDocument, RuleDef, TsConfig};
pub use resolve::{resolve_policy, ResolvedPolicy};

use anyhow::Context;

/// Parse a `package.json` (dependencies + `checkImport` policy) into a typed model.
pub fn parse_package_manifest(input: &str) -> anyhow::Result<PackageManifest> {
    let manifest: PackageManifest =
        serde_json::from_str(input).context("parse package.json")?;
    Ok(manifest)
}

/// Parse a `tsconfig.json` (`compilerOptions.baseUrl` and `paths`) into a typed model.
///
/// Strict JSON only; JSONC comments are not supported.
pub fn parse_tsconfig(input: &str) -> anyhow::Result<TsConfig> {
    let tsconfig: TsConfig = serde_json::from_str(input).context("parse tsconfig.json")?;
    Ok(tsconfig)
}

//! Fuzz target for import resolution and evaluation.
//!
//! Goal: `resolve` and `evaluate` should **never panic** for arbitrary
//! source paths and specifiers under a fixed valid policy.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_resolver
//! ```

#![no_main]

use arbitrary::Arbitrary;
use layerguard_domain::model::{
    AliasMap, AliasRule, DefaultAction, ImportEdge, LayerDef, PolicyConfig, PolicyRule,
};
use layerguard_types::ProjectPath;
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeSet;

#[derive(Arbitrary, Debug)]
struct ResolverInput {
    source_file: String,
    specifier: String,
}

fn fixed_config() -> (PolicyConfig, AliasMap) {
    let config = PolicyConfig::new(
        vec![
            LayerDef::new("ui", "ui/**").expect("static pattern"),
            LayerDef::new("core", "core/**").expect("static pattern"),
            LayerDef::new("rest", "**").expect("static pattern"),
        ],
        vec![PolicyRule {
            from: "ui".to_string(),
            allow: vec!["core".to_string()],
            disallow: vec![],
        }],
        DefaultAction::Disallow,
        vec!["*.spec".to_string()],
        ["lodash".to_string()].into_iter().collect::<BTreeSet<_>>(),
    )
    .expect("static config");

    let aliases = AliasMap {
        base_dir: ProjectPath::default(),
        aliases: vec![AliasRule::new("@core/*", "core/*"), AliasRule::new("lib", "core/lib")],
    };
    (config, aliases)
}

fuzz_target!(|input: ResolverInput| {
    // Limit input size to keep fuzzing fast
    if input.source_file.len() > 512 || input.specifier.len() > 512 {
        return;
    }

    let (config, aliases) = fixed_config();
    let edge = ImportEdge {
        source_file: ProjectPath::new(&input.source_file),
        specifier: input.specifier,
    };

    // Should never panic - coverage errors are fine
    let _ = layerguard_domain::evaluate(&edge, &config, &aliases);
});

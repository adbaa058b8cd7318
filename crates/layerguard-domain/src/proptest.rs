//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Evaluation purity (identical inputs, identical verdicts)
//! - Path normalization (no `.`/`..` residue inside the project)
//! - Resolver totality (never panics, externals always exempt)

use crate::engine::evaluate;
use crate::model::{
    AliasMap, AliasRule, DefaultAction, ImportEdge, LayerDef, PolicyConfig, PolicyRule,
    ResolvedTarget,
};
use crate::resolve::resolve;
use layerguard_types::ProjectPath;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Strategy for path segments (no separators, no dots).
fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_-]{0,8}").unwrap()
}

/// Strategy for relative specifiers mixing `..`, `.`, and plain segments.
fn arb_specifier() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("..".to_string()),
            Just(".".to_string()),
            arb_segment(),
        ],
        1..6,
    )
    .prop_map(|segments| segments.join("/"))
}

fn arb_source_file() -> impl Strategy<Value = ProjectPath> {
    prop::collection::vec(arb_segment(), 1..5).prop_map(|segments| ProjectPath::new(segments.join("/")))
}

fn ui_core_config() -> PolicyConfig {
    PolicyConfig::new(
        vec![
            LayerDef::new("ui", "ui/**").unwrap(),
            LayerDef::new("core", "core/**").unwrap(),
            LayerDef::new("rest", "**").unwrap(),
        ],
        vec![PolicyRule {
            from: "ui".to_string(),
            allow: vec!["core".to_string()],
            disallow: vec![],
        }],
        DefaultAction::Disallow,
        vec!["*.spec".to_string()],
        ["lodash".to_string(), "react".to_string()]
            .into_iter()
            .collect::<BTreeSet<_>>(),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn evaluate_is_deterministic(source in arb_source_file(), specifier in arb_specifier()) {
        let cfg = ui_core_config();
        let map = AliasMap {
            base_dir: ProjectPath::default(),
            aliases: vec![AliasRule::new("@core/*", "core/*")],
        };
        let edge = ImportEdge { source_file: source, specifier };
        let first = evaluate(&edge, &cfg, &map);
        let second = evaluate(&edge, &cfg, &map);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn resolver_is_total(source in arb_source_file(), specifier in "\\PC{0,40}") {
        let cfg = ui_core_config();
        let map = AliasMap {
            base_dir: ProjectPath::default(),
            aliases: vec![AliasRule::new("@core/*", "core/*"), AliasRule::new("lib", "core/lib")],
        };
        // Must not panic on arbitrary specifier text.
        let _ = resolve(&source, &specifier, &cfg, &map);
    }

    #[test]
    fn declared_externals_always_resolve_external(
        source in arb_source_file(),
        tail in "[a-z0-9/._-]{0,20}",
    ) {
        let cfg = ui_core_config();
        let specifier = format!("lodash{tail}");
        prop_assert_eq!(
            resolve(&source, &specifier, &cfg, &AliasMap::empty()),
            ResolvedTarget::External
        );
    }

    #[test]
    fn normalized_paths_have_no_dot_segments(raw in arb_specifier()) {
        let normalized = ProjectPath::new(raw);
        if normalized.as_str() != "." && !normalized.escapes_root() {
            for seg in normalized.as_str().split('/') {
                prop_assert_ne!(seg, ".");
                prop_assert_ne!(seg, "..");
            }
        }
    }
}

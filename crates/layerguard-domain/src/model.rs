//! Immutable engine inputs: layer definitions, rules, and the alias table.
//!
//! All glob patterns are compiled here, once, from pre-validated strings
//! supplied by `layerguard-settings`. The engine never recompiles patterns
//! on the evaluation path.

use globset::{Glob, GlobMatcher, GlobSet, GlobSetBuilder};
use layerguard_types::ProjectPath;
use std::collections::BTreeSet;

/// Fallback verdict when no rule decides an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultAction {
    Allow,
    Disallow,
}

/// One named architectural layer, defined by a glob over project-relative paths.
///
/// Order within `PolicyConfig::layers` is significant: classification is
/// first-match-wins, so authors put specific patterns before general ones.
#[derive(Clone, Debug)]
pub struct LayerDef {
    pub name: String,
    pub pattern: String,
    matcher: GlobMatcher,
}

impl LayerDef {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Result<Self, globset::Error> {
        let pattern = pattern.into();
        let matcher = Glob::new(&pattern)?.compile_matcher();
        Ok(Self {
            name: name.into(),
            pattern,
            matcher,
        })
    }

    pub fn matches(&self, path: &ProjectPath) -> bool {
        self.matcher.is_match(path.as_str())
    }
}

/// A directed permission statement keyed by source layer.
///
/// Multiple rules with the same `from` are legal; lookup unions their
/// `allow`/`disallow` sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyRule {
    pub from: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
}

/// The whole boundary policy, loaded once per run and never mutated.
#[derive(Clone, Debug)]
pub struct PolicyConfig {
    pub layers: Vec<LayerDef>,
    pub rules: Vec<PolicyRule>,
    pub default_action: DefaultAction,
    pub ignore_patterns: Vec<String>,
    pub external_packages: BTreeSet<String>,
    ignore: Option<GlobSet>,
}

impl PolicyConfig {
    pub fn new(
        layers: Vec<LayerDef>,
        rules: Vec<PolicyRule>,
        default_action: DefaultAction,
        ignore_patterns: Vec<String>,
        external_packages: BTreeSet<String>,
    ) -> Result<Self, globset::Error> {
        let ignore = if ignore_patterns.is_empty() {
            None
        } else {
            let mut builder = GlobSetBuilder::new();
            for pattern in &ignore_patterns {
                // Ignore patterns apply at any depth.
                builder.add(Glob::new(&format!("**/{pattern}"))?);
            }
            Some(builder.build()?)
        };
        Ok(Self {
            layers,
            rules,
            default_action,
            ignore_patterns,
            external_packages,
            ignore,
        })
    }

    /// True when `path` is wholly exempt from policy evaluation.
    pub fn is_ignored(&self, path: &ProjectPath) -> bool {
        self.ignore
            .as_ref()
            .map(|set| set.is_match(path.as_str()))
            .unwrap_or(false)
    }

    pub fn layer(&self, name: &str) -> Option<&LayerDef> {
        self.layers.iter().find(|l| l.name == name)
    }
}

/// One alias entry from the alias manifest, e.g. `"@app/*" -> "src/app/*"`.
#[derive(Clone, Debug)]
pub struct AliasRule {
    pub pattern: String,
    pub target: String,
    prefix: String,
    wildcard: bool,
}

impl AliasRule {
    pub fn new(pattern: impl Into<String>, target: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let target = target.into();
        let (prefix, wildcard) = match pattern.strip_suffix("/*") {
            Some(p) => (p.to_string(), true),
            None => (pattern.clone(), false),
        };
        let target = target.strip_suffix("/*").unwrap_or(&target).to_string();
        Self {
            pattern,
            target,
            prefix,
            wildcard,
        }
    }

    /// Returns the path remainder after the alias prefix when `specifier`
    /// matches this alias.
    ///
    /// Wildcard aliases (`"@app/*"`) match the bare prefix or any deeper
    /// path under it; non-wildcard aliases require at least one additional
    /// segment.
    pub fn match_remainder<'s>(&self, specifier: &'s str) -> Option<&'s str> {
        let rest = match specifier.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest,
            None => return None,
        };
        if rest.is_empty() {
            return self.wildcard.then_some("");
        }
        let rest = rest.strip_prefix('/')?;
        if !self.wildcard && rest.is_empty() {
            return None;
        }
        Some(rest)
    }

    /// Length of the fixed prefix, used to rank overlapping aliases by
    /// specificity.
    pub(crate) fn prefix_len(&self) -> usize {
        self.prefix.len()
    }
}

/// Path-alias resolution table from the alias manifest.
#[derive(Clone, Debug)]
pub struct AliasMap {
    pub base_dir: ProjectPath,
    pub aliases: Vec<AliasRule>,
}

impl AliasMap {
    pub fn empty() -> Self {
        Self {
            base_dir: ProjectPath::default(),
            aliases: Vec::new(),
        }
    }
}

/// One observed import.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportEdge {
    pub source_file: ProjectPath,
    pub specifier: String,
}

/// Where an import specifier points after resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedTarget {
    Internal(ProjectPath),
    External,
}

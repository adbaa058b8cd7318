//! The boundary rule engine.
//!
//! `evaluate` is a pure function of `(ImportEdge, PolicyConfig, AliasMap)`.
//! No IO, no carried state between calls; callers may evaluate independent
//! edges in any order or in parallel.

use crate::classify::classify;
use crate::model::{AliasMap, DefaultAction, ImportEdge, LayerDef, PolicyConfig, ResolvedTarget};
use crate::resolve::resolve;
use layerguard_types::{ids, ProjectPath};
use thiserror::Error;

/// Configuration-coverage failures. These abort the whole run: a path the
/// layer definitions cannot classify means the policy does not cover the
/// codebase, which is a config defect rather than a per-edge violation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("source file `{path}` matches no declared layer pattern")]
    UnclassifiedSource { path: ProjectPath },

    #[error("import `{specifier}` resolves to `{path}`, which matches no declared layer pattern")]
    UnclassifiedTarget { path: ProjectPath, specifier: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Permit,
    Deny(DenyReason),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DenyReason {
    ExplicitDisallow { layer: String },
    NotInAllowSet { layer: String },
    DefaultDeny,
}

impl DenyReason {
    pub fn code(&self) -> &'static str {
        match self {
            DenyReason::ExplicitDisallow { .. } => ids::CODE_EXPLICIT_DISALLOW,
            DenyReason::NotInAllowSet { .. } => ids::CODE_NOT_IN_ALLOW_SET,
            DenyReason::DefaultDeny => ids::CODE_DEFAULT_DENY,
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DenyReason::ExplicitDisallow { layer } => {
                write!(f, "import violates explicit disallow for layer `{layer}`")
            }
            DenyReason::NotInAllowSet { layer } => {
                write!(f, "import not in allowed set for layer `{layer}`")
            }
            DenyReason::DefaultDeny => {
                write!(f, "no rule permits this import; default policy is deny")
            }
        }
    }
}

/// Evaluate one import edge against the policy.
///
/// Steps, in fixed order:
/// 1. ignore-pattern exemption of the source file
/// 2. specifier resolution; external targets are always permitted
/// 3. classification of the source file and the internal target (both must
///    be covered by the layer definitions)
/// 4. rule lookup by source layer; no rules -> default action
/// 5. allow/disallow pattern matching with explicit disallow dominating
pub fn evaluate(
    edge: &ImportEdge,
    config: &PolicyConfig,
    aliases: &AliasMap,
) -> Result<Verdict, EvalError> {
    if config.is_ignored(&edge.source_file) {
        return Ok(Verdict::Permit);
    }

    let target = match resolve(&edge.source_file, &edge.specifier, config, aliases) {
        ResolvedTarget::External => return Ok(Verdict::Permit),
        ResolvedTarget::Internal(path) => path,
    };

    let source_layer = classify(&config.layers, &edge.source_file).ok_or_else(|| {
        EvalError::UnclassifiedSource {
            path: edge.source_file.clone(),
        }
    })?;

    if classify(&config.layers, &target).is_none() {
        return Err(EvalError::UnclassifiedTarget {
            path: target,
            specifier: edge.specifier.clone(),
        });
    }

    let rule_set: Vec<_> = config
        .rules
        .iter()
        .filter(|rule| rule.from == source_layer.name)
        .collect();

    if rule_set.is_empty() {
        return Ok(default_verdict(config.default_action));
    }

    let disallow_layers = layer_union(config, rule_set.iter().flat_map(|r| &r.disallow));
    let allow_layers = layer_union(config, rule_set.iter().flat_map(|r| &r.allow));

    let matches_any = |layers: &[&LayerDef]| layers.iter().any(|l| l.matches(&target));

    // Explicit disallow dominates explicit allow.
    if !disallow_layers.is_empty() && matches_any(&disallow_layers) {
        return Ok(Verdict::Deny(DenyReason::ExplicitDisallow {
            layer: source_layer.name.clone(),
        }));
    }
    if !allow_layers.is_empty() {
        if matches_any(&allow_layers) {
            return Ok(Verdict::Permit);
        }
        return Ok(Verdict::Deny(DenyReason::NotInAllowSet {
            layer: source_layer.name.clone(),
        }));
    }
    Ok(default_verdict(config.default_action))
}

fn default_verdict(action: DefaultAction) -> Verdict {
    match action {
        DefaultAction::Allow => Verdict::Permit,
        DefaultAction::Disallow => Verdict::Deny(DenyReason::DefaultDeny),
    }
}

fn layer_union<'c>(
    config: &'c PolicyConfig,
    names: impl Iterator<Item = &'c String>,
) -> Vec<&'c LayerDef> {
    let mut seen: Vec<&str> = Vec::new();
    let mut out: Vec<&LayerDef> = Vec::new();
    for name in names {
        if seen.contains(&name.as_str()) {
            continue;
        }
        seen.push(name);
        // Referential integrity of rule layer names is validated at load time.
        if let Some(layer) = config.layer(name) {
            out.push(layer);
        }
    }
    out
}

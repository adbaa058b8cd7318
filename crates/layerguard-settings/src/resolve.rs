use crate::model::{PackageManifest, PolicyDocument, TsConfig};
use anyhow::Context;
use layerguard_domain::model::{
    AliasMap, AliasRule, DefaultAction, LayerDef, PolicyConfig, PolicyRule,
};
use layerguard_types::ProjectPath;
use std::collections::BTreeSet;

/// The immutable engine inputs, built once per run.
#[derive(Clone, Debug)]
pub struct ResolvedPolicy {
    pub config: PolicyConfig,
    pub aliases: AliasMap,
}

/// Validate the policy document and compile it together with the alias
/// manifest into engine inputs.
///
/// All schema problems fail here with a precise message, before any edge is
/// evaluated: unknown default action, empty or duplicated layer list, invalid
/// globs, rules referencing undeclared layer types, alias entries without a
/// target.
pub fn resolve_policy(pkg: &PackageManifest, tsconfig: &TsConfig) -> anyhow::Result<ResolvedPolicy> {
    let doc = pkg
        .check_import
        .as_ref()
        .context("package.json declares no `checkImport` policy")?;

    let config = compile_policy(doc, external_packages(pkg))?;
    let aliases = compile_aliases(tsconfig)?;

    Ok(ResolvedPolicy { config, aliases })
}

fn external_packages(pkg: &PackageManifest) -> BTreeSet<String> {
    pkg.dependencies
        .keys()
        .chain(pkg.dev_dependencies.keys())
        .cloned()
        .collect()
}

fn compile_policy(
    doc: &PolicyDocument,
    external_packages: BTreeSet<String>,
) -> anyhow::Result<PolicyConfig> {
    let default_action = parse_default_action(&doc.default)?;

    if doc.element.is_empty() {
        anyhow::bail!("checkImport.element must declare at least one layer");
    }

    let mut declared: BTreeSet<&str> = BTreeSet::new();
    for element in &doc.element {
        if element.type_name.is_empty() {
            anyhow::bail!("checkImport.element entry has an empty type name");
        }
        if !declared.insert(&element.type_name) {
            anyhow::bail!("duplicate layer type `{}` in checkImport.element", element.type_name);
        }
    }

    let layers = doc
        .element
        .iter()
        .map(|element| {
            LayerDef::new(&element.type_name, &element.pattern).with_context(|| {
                format!(
                    "invalid glob pattern for layer `{}`: {}",
                    element.type_name, element.pattern
                )
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut rules = Vec::with_capacity(doc.rules.len());
    for rule in &doc.rules {
        require_declared(&declared, &rule.from, "rules.from")?;
        for name in &rule.allow {
            require_declared(&declared, name, "rules.allow")?;
        }
        for name in &rule.disallow {
            require_declared(&declared, name, "rules.disallow")?;
        }
        rules.push(PolicyRule {
            from: rule.from.clone(),
            allow: rule.allow.clone(),
            disallow: rule.disallow.clone(),
        });
    }

    PolicyConfig::new(
        layers,
        rules,
        default_action,
        doc.ignore.clone(),
        external_packages,
    )
    .context("invalid glob in checkImport.ignore")
}

fn compile_aliases(tsconfig: &TsConfig) -> anyhow::Result<AliasMap> {
    let options = &tsconfig.compiler_options;
    let base_dir = ProjectPath::new(options.base_url.as_deref().unwrap_or("."));

    let mut aliases = Vec::with_capacity(options.paths.len());
    for (pattern, targets) in &options.paths {
        // tsconfig-paths tries targets in order against the filesystem; the
        // pure resolver takes the first.
        let target = targets
            .first()
            .with_context(|| format!("alias `{pattern}` has no target directory"))?;
        aliases.push(AliasRule::new(pattern.as_str(), target.as_str()));
    }

    Ok(AliasMap { base_dir, aliases })
}

fn parse_default_action(value: &str) -> anyhow::Result<DefaultAction> {
    match value {
        "allow" => Ok(DefaultAction::Allow),
        "disallow" => Ok(DefaultAction::Disallow),
        other => anyhow::bail!("unknown checkImport.default: {other} (expected 'allow' or 'disallow')"),
    }
}

fn require_declared(declared: &BTreeSet<&str>, name: &str, field: &str) -> anyhow::Result<()> {
    if declared.contains(name) {
        return Ok(());
    }
    anyhow::bail!("checkImport {field} references undeclared layer type `{name}`")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_package_manifest, parse_tsconfig};

    const PACKAGE_JSON: &str = r#"{
        "name": "demo",
        "dependencies": { "lodash": "^4.17.0" },
        "devDependencies": { "vitest": "^3.0.0" },
        "checkImport": {
            "default": "disallow",
            "element": [
                { "type": "ui", "pattern": "src/ui/**" },
                { "type": "core", "pattern": "src/core/**" }
            ],
            "rules": [ { "from": "ui", "allow": ["core"] } ],
            "ignore": ["*.spec.ts"]
        }
    }"#;

    const TSCONFIG_JSON: &str = r#"{
        "compilerOptions": {
            "baseUrl": ".",
            "paths": { "@core/*": ["src/core/*"] }
        }
    }"#;

    #[test]
    fn resolves_a_complete_policy() {
        let pkg = parse_package_manifest(PACKAGE_JSON).unwrap();
        let ts = parse_tsconfig(TSCONFIG_JSON).unwrap();
        let resolved = resolve_policy(&pkg, &ts).unwrap();

        assert_eq!(resolved.config.layers.len(), 2);
        assert_eq!(resolved.config.layers[0].name, "ui");
        assert_eq!(resolved.config.default_action, DefaultAction::Disallow);
        assert!(resolved.config.external_packages.contains("lodash"));
        assert!(resolved.config.external_packages.contains("vitest"));
        assert_eq!(resolved.aliases.aliases.len(), 1);
        assert_eq!(resolved.aliases.base_dir.as_str(), ".");
    }

    #[test]
    fn missing_policy_document_fails() {
        let pkg = parse_package_manifest(r#"{ "name": "demo" }"#).unwrap();
        let err = resolve_policy(&pkg, &TsConfig::default()).unwrap_err();
        assert!(err.to_string().contains("checkImport"));
    }

    #[test]
    fn unknown_default_action_fails() {
        let pkg = parse_package_manifest(
            r#"{ "checkImport": { "default": "maybe", "element": [ { "type": "a", "pattern": "**" } ] } }"#,
        )
        .unwrap();
        let err = resolve_policy(&pkg, &TsConfig::default()).unwrap_err();
        assert!(err.to_string().contains("unknown checkImport.default"));
    }

    #[test]
    fn rule_referencing_undeclared_layer_fails() {
        let pkg = parse_package_manifest(
            r#"{ "checkImport": {
                "default": "allow",
                "element": [ { "type": "ui", "pattern": "ui/**" } ],
                "rules": [ { "from": "ui", "disallow": ["db"] } ]
            } }"#,
        )
        .unwrap();
        let err = resolve_policy(&pkg, &TsConfig::default()).unwrap_err();
        assert!(err.to_string().contains("undeclared layer type `db`"));
    }

    #[test]
    fn duplicate_layer_type_fails() {
        let pkg = parse_package_manifest(
            r#"{ "checkImport": {
                "default": "allow",
                "element": [
                    { "type": "ui", "pattern": "ui/**" },
                    { "type": "ui", "pattern": "app/**" }
                ]
            } }"#,
        )
        .unwrap();
        let err = resolve_policy(&pkg, &TsConfig::default()).unwrap_err();
        assert!(err.to_string().contains("duplicate layer type `ui`"));
    }

    #[test]
    fn invalid_layer_glob_fails() {
        let pkg = parse_package_manifest(
            r#"{ "checkImport": {
                "default": "allow",
                "element": [ { "type": "ui", "pattern": "ui/[" } ]
            } }"#,
        )
        .unwrap();
        let err = resolve_policy(&pkg, &TsConfig::default()).unwrap_err();
        assert!(err.to_string().contains("invalid glob pattern for layer `ui`"));
    }

    #[test]
    fn empty_element_list_fails() {
        let pkg = parse_package_manifest(
            r#"{ "checkImport": { "default": "allow", "element": [] } }"#,
        )
        .unwrap();
        let err = resolve_policy(&pkg, &TsConfig::default()).unwrap_err();
        assert!(err.to_string().contains("at least one layer"));
    }

    #[test]
    fn alias_without_target_fails() {
        let pkg = parse_package_manifest(PACKAGE_JSON).unwrap();
        let ts = parse_tsconfig(
            r#"{ "compilerOptions": { "paths": { "@bad/*": [] } } }"#,
        )
        .unwrap();
        let err = resolve_policy(&pkg, &ts).unwrap_err();
        assert!(err.to_string().contains("alias `@bad/*` has no target directory"));
    }

    #[test]
    fn missing_base_url_defaults_to_project_root() {
        let pkg = parse_package_manifest(PACKAGE_JSON).unwrap();
        let ts = parse_tsconfig(r#"{ "compilerOptions": { "paths": { "@core/*": ["src/core/*"] } } }"#)
            .unwrap();
        let resolved = resolve_policy(&pkg, &ts).unwrap();
        assert_eq!(resolved.aliases.base_dir.as_str(), ".");
    }

    #[test]
    fn malformed_json_fails_at_parse() {
        assert!(parse_package_manifest("{ not json").is_err());
        assert!(parse_tsconfig("// jsonc comment\n{}").is_err());
    }
}

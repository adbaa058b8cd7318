use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The subset of `package.json` layerguard reads.
///
/// This is a *user-facing* model: unknown fields are ignored so any real
/// package manifest parses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PackageManifest {
    /// Runtime dependencies; the key set feeds the external-package exemption.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    /// Development dependencies; exempted the same way.
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,

    /// The boundary policy document.
    #[serde(default, rename = "checkImport", skip_serializing_if = "Option::is_none")]
    pub check_import: Option<PolicyDocument>,
}

/// The `checkImport` policy document schema.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyDocument {
    /// Fallback verdict: `allow` or `disallow`.
    pub default: String,

    /// Ordered layer definitions; first match wins during classification.
    pub element: Vec<ElementDef>,

    #[serde(default)]
    pub rules: Vec<RuleDef>,

    /// Source files wholly exempt from evaluation.
    #[serde(default)]
    pub ignore: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ElementDef {
    #[serde(rename = "type")]
    pub type_name: String,
    pub pattern: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleDef {
    pub from: String,

    #[serde(default)]
    pub allow: Vec<String>,

    #[serde(default)]
    pub disallow: Vec<String>,
}

/// The subset of `tsconfig.json` layerguard reads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TsConfig {
    #[serde(default, rename = "compilerOptions")]
    pub compiler_options: CompilerOptions,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompilerOptions {
    #[serde(default, rename = "baseUrl", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Alias pattern -> candidate target directories.
    #[serde(default)]
    pub paths: BTreeMap<String, Vec<String>>,
}

//! The `check` use case: evaluate every import edge and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use layerguard_domain::model::ImportEdge;
use layerguard_domain::{evaluate, Verdict as EdgeVerdict};
use layerguard_settings::{ResolvedPolicy, TsConfig};
use layerguard_types::{
    ids, Diagnostic, LayerguardData, Location, ReportEnvelope, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
use serde_json::json;
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Project root path.
    pub root: &'a Utf8Path,
    /// `package.json` contents.
    pub package_manifest_text: &'a str,
    /// `tsconfig.json` contents; `None` means no alias manifest (empty alias table).
    pub tsconfig_text: Option<&'a str>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: ReportEnvelope,
    /// The resolved policy used.
    pub resolved: ResolvedPolicy,
}

/// Run the check: resolve config, scan sources, evaluate each edge.
///
/// Deny verdicts accumulate as diagnostics without halting; a coverage
/// failure (a path the layer definitions cannot classify) aborts the run as
/// a configuration error.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let pkg = layerguard_settings::parse_package_manifest(input.package_manifest_text)
        .context("parse package manifest")?;
    let tsconfig = match input.tsconfig_text {
        Some(text) => layerguard_settings::parse_tsconfig(text).context("parse alias manifest")?,
        None => TsConfig::default(),
    };
    let resolved = layerguard_settings::resolve_policy(&pkg, &tsconfig).context("resolve policy")?;

    let scan = layerguard_scan::collect_edges(input.root).context("scan source tree")?;

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    for edge in &scan.edges {
        let import = ImportEdge {
            source_file: edge.file.clone(),
            specifier: edge.specifier.clone(),
        };
        let verdict = evaluate(&import, &resolved.config, &resolved.aliases)
            .context("layer definitions do not cover the codebase")?;

        if let EdgeVerdict::Deny(reason) = verdict {
            diagnostics.push(Diagnostic {
                check_id: ids::CHECK_IMPORT_BOUNDARY.to_string(),
                code: reason.code().to_string(),
                message: format!(
                    "Importing from this path is not allowed: {}",
                    edge.specifier
                ),
                location: Location {
                    path: edge.file.clone(),
                    line: Some(edge.line),
                    col: Some(edge.col),
                },
                specifier: edge.specifier.clone(),
                help: Some(reason.to_string()),
                data: json!({
                    "file": edge.file.as_str(),
                    "specifier": edge.specifier,
                }),
            });
        }
    }

    let finished_at = OffsetDateTime::now_utc();
    let verdict = if diagnostics.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };
    let data = LayerguardData {
        files_scanned: scan.files.len() as u32,
        imports_scanned: scan.edges.len() as u32,
        violations: diagnostics.len() as u32,
    };

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "layerguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        diagnostics,
        data,
    };

    Ok(CheckOutput { report, resolved })
}

/// Map verdict to exit code: 0 = pass, 2 = violations found.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}

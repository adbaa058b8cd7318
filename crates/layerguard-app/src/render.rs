//! Render use cases: human text and GitHub annotations from in-memory reports.

use layerguard_types::{ReportEnvelope, Verdict};

/// Plain text rendering: one line per diagnostic plus a summary line.
pub fn render_text(report: &ReportEnvelope) -> String {
    let mut out = String::new();

    for diag in &report.diagnostics {
        let line = diag.location.line.unwrap_or(0);
        let col = diag.location.col.unwrap_or(0);
        out.push_str(&format!(
            "{}:{}:{} {} [{}]\n",
            diag.location.path, line, col, diag.message, diag.code
        ));
        if let Some(help) = &diag.help {
            out.push_str(&format!("  {help}\n"));
        }
    }

    match report.verdict {
        Verdict::Pass => out.push_str(&format!(
            "ok: {} imports across {} files, no boundary violations\n",
            report.data.imports_scanned, report.data.files_scanned
        )),
        Verdict::Fail => {
            let noun = if report.data.violations == 1 {
                "violation"
            } else {
                "violations"
            };
            out.push_str(&format!(
                "{} boundary {noun} ({} imports across {} files)\n",
                report.data.violations, report.data.imports_scanned, report.data.files_scanned
            ));
        }
    }
    out
}

/// Render diagnostics as GitHub Actions workflow command annotations.
///
/// Format: `::error file={path},line={line},col={col}::{message}`
pub fn render_annotations(report: &ReportEnvelope, max: usize) -> Vec<String> {
    report
        .diagnostics
        .iter()
        .take(max)
        .map(|diag| {
            let mut meta = format!("file={}", diag.location.path);
            if let Some(line) = diag.location.line {
                meta.push_str(&format!(",line={line}"));
            }
            if let Some(col) = diag.location.col {
                meta.push_str(&format!(",col={col}"));
            }

            let message = format!("[{}:{}] {}", diag.check_id, diag.code, diag.message)
                .replace('%', "%25")
                .replace('\r', "%0D")
                .replace('\n', "%0A");

            format!("::error {meta}::{message}")
        })
        .collect()
}

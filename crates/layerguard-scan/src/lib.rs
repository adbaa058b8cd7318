//! Source tree adapters: discover source files, extract import edges.
//!
//! This crate is allowed to do filesystem IO. Policy manifests are read by
//! the caller (typically the CLI); this crate only walks the source tree.

#![forbid(unsafe_code)]

mod discover;
mod extract;

use anyhow::Context;
use camino::Utf8Path;
use layerguard_types::ProjectPath;

pub use discover::discover_sources;
pub use extract::{scan_imports, RawImport};

/// One import statement observed in a source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceEdge {
    pub file: ProjectPath,
    pub specifier: String,
    pub line: u32,
    pub col: u32,
}

/// Everything the scan produced for one project root.
#[derive(Clone, Debug, Default)]
pub struct ScanOutput {
    pub files: Vec<ProjectPath>,
    pub edges: Vec<SourceEdge>,
}

/// Walk `root` and extract every import edge from every source file.
///
/// Files and edges come back in deterministic (path, line) order.
pub fn collect_edges(root: &Utf8Path) -> anyhow::Result<ScanOutput> {
    let files = discover_sources(root)?;
    let mut edges = Vec::new();

    for file in &files {
        let abs = root.join(file.as_str());
        let text =
            std::fs::read_to_string(abs.as_std_path()).with_context(|| format!("read {abs}"))?;
        for import in scan_imports(&text) {
            edges.push(SourceEdge {
                file: file.clone(),
                specifier: import.specifier,
                line: import.line,
                col: import.col,
            });
        }
    }

    Ok(ScanOutput { files, edges })
}

/// Fuzz-friendly API for testing extraction robustness without filesystem
/// access. These functions are designed to never panic on any input.
pub mod fuzz {
    /// Scan arbitrary text for import specifiers. **Never panics** on any input.
    pub fn scan_imports(text: &str) -> usize {
        super::scan_imports(text).len()
    }
}

use anyhow::Context;
use camino::Utf8Path;
use layerguard_types::ProjectPath;
use walkdir::{DirEntry, WalkDir};

/// Extensions treated as scannable source files.
const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs"];

/// Discover source files under `root`, as sorted project-relative paths.
///
/// `node_modules` and hidden directories are pruned; `.d.ts` declaration
/// files carry no runtime imports worth checking and are skipped.
pub fn discover_sources(root: &Utf8Path) -> anyhow::Result<Vec<ProjectPath>> {
    let mut out: Vec<ProjectPath> = Vec::new();

    for entry in WalkDir::new(root.as_std_path())
        .sort_by_file_name()
        .into_iter()
        .filter_entry(is_candidate)
    {
        let entry = entry.with_context(|| format!("walk {root}"))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.ends_with(".d.ts") || !has_source_extension(&name) {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(root.as_std_path())
            .context("walked entry outside root")?;
        out.push(ProjectPath::new(rel.to_string_lossy()));
    }

    out.sort();
    Ok(out)
}

fn is_candidate(entry: &DirEntry) -> bool {
    // The root itself is always entered, whatever it is named.
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    if entry.file_type().is_dir() {
        return name != "node_modules" && !name.starts_with('.');
    }
    !name.starts_with('.')
}

fn has_source_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

//! Import resolution: map a specifier to an internal path or the external
//! sentinel.
//!
//! Resolution order is fixed:
//! 1. declared external package prefix -> `External`
//! 2. alias table match (most specific prefix wins) -> target dir +
//!    remainder, against the base dir
//! 3. relative to the importing file's directory
//!
//! Internal results are lexically normalized project-relative paths. There
//! is no filesystem probing and no extension guessing here.

use crate::model::{AliasMap, PolicyConfig, ResolvedTarget};
use layerguard_types::ProjectPath;

pub fn resolve(
    source_file: &ProjectPath,
    specifier: &str,
    config: &PolicyConfig,
    aliases: &AliasMap,
) -> ResolvedTarget {
    // External packages are never subject to layer rules, regardless of the
    // alias table.
    if config
        .external_packages
        .iter()
        .any(|name| specifier.starts_with(name.as_str()))
    {
        return ResolvedTarget::External;
    }

    // Overlapping aliases: the longest matching prefix wins, whatever the
    // declaration order. Ties keep the first declared.
    let mut best: Option<(usize, ProjectPath)> = None;
    for alias in &aliases.aliases {
        if let Some(rest) = alias.match_remainder(specifier) {
            if best
                .as_ref()
                .is_some_and(|(len, _)| *len >= alias.prefix_len())
            {
                continue;
            }
            let base = aliases.base_dir.join(&alias.target);
            let target = if rest.is_empty() { base } else { base.join(rest) };
            best = Some((alias.prefix_len(), target));
        }
    }
    if let Some((_, target)) = best {
        return ResolvedTarget::Internal(target);
    }

    ResolvedTarget::Internal(source_file.parent().join(specifier))
}

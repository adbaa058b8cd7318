//! Layer classification: map a project-relative path to a layer type.

use crate::model::LayerDef;
use layerguard_types::ProjectPath;

/// Returns the first layer whose pattern matches `path`, in declared order.
///
/// `None` means the layer definitions do not cover `path`; the caller treats
/// that as a configuration error, never as a default type.
pub fn classify<'a>(layers: &'a [LayerDef], path: &ProjectPath) -> Option<&'a LayerDef> {
    layers.iter().find(|layer| layer.matches(path))
}

//! Stable identifiers for diagnostic codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// The single check layerguard performs.
pub const CHECK_IMPORT_BOUNDARY: &str = "imports.boundary";

// Codes: imports.boundary
pub const CODE_EXPLICIT_DISALLOW: &str = "explicit_disallow";
pub const CODE_NOT_IN_ALLOW_SET: &str = "not_in_allow_set";
pub const CODE_DEFAULT_DENY: &str = "default_deny";

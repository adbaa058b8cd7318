//! Stable DTOs and IDs used across the layerguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes
//! - canonical project-relative path handling

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;
pub mod report;

pub use path::ProjectPath;
pub use report::{
    Diagnostic, LayerguardData, Location, ReportEnvelope, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};

//! Application use cases: run the boundary check, produce and render reports.
//!
//! Business logic is split by concern:
//! - `check`: config resolution + scan + per-edge evaluation
//! - `report`: envelope (de)serialization
//! - `render`: human text and GitHub Actions annotations

#![forbid(unsafe_code)]

mod check;
mod render;
mod report;

pub use check::{run_check, verdict_exit_code, CheckInput, CheckOutput};
pub use render::{render_annotations, render_text};
pub use report::{parse_report_json, serialize_report};

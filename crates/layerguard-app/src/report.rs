//! Report envelope (de)serialization.

use anyhow::Context;
use layerguard_types::{ReportEnvelope, SCHEMA_REPORT_V1};

pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(report).context("serialize report")?;
    text.push('\n');
    Ok(text)
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ReportEnvelope> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    let report: ReportEnvelope =
        serde_json::from_value(value).context("parse layerguard report")?;
    Ok(report)
}

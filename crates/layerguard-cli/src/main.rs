//! CLI entry point for layerguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `layerguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use layerguard_app::{
    parse_report_json, render_annotations, render_text, run_check, serialize_report,
    verdict_exit_code, CheckInput,
};

#[derive(Parser, Debug)]
#[command(
    name = "layerguard",
    version,
    about = "Architecture boundary policy checker for layered JS/TS codebases"
)]
struct Cli {
    /// Project root (directory containing package.json).
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Package manifest path, relative to the root.
    #[arg(long, default_value = "package.json")]
    package_manifest: Utf8PathBuf,

    /// Alias manifest path, relative to the root (missing file means no aliases).
    #[arg(long, default_value = "tsconfig.json")]
    tsconfig: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the boundary policy against the source tree.
    Check {
        /// Where to write the JSON report (omitted: no artifact).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Stdout rendering: text or json.
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.cmd {
        Commands::Check { report_out, format } => {
            cmd_check(&cli, report_out.as_deref(), format)
        }
        Commands::Annotations { report, max } => cmd_annotations(report, *max),
    }
}

fn cmd_check(cli: &Cli, report_out: Option<&Utf8Path>, format: &str) -> anyhow::Result<()> {
    let package_path = cli.root.join(&cli.package_manifest);
    let package_text = std::fs::read_to_string(package_path.as_std_path())
        .with_context(|| format!("read {package_path}"))?;

    let tsconfig_path = cli.root.join(&cli.tsconfig);
    let tsconfig_text = match std::fs::read_to_string(tsconfig_path.as_std_path()) {
        Ok(text) => Some(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => return Err(err).with_context(|| format!("read {tsconfig_path}")),
    };

    let output = run_check(CheckInput {
        root: &cli.root,
        package_manifest_text: &package_text,
        tsconfig_text: tsconfig_text.as_deref(),
    })?;

    if let Some(path) = report_out {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent.as_std_path())
                .with_context(|| format!("create {parent}"))?;
        }
        std::fs::write(path.as_std_path(), serialize_report(&output.report)?)
            .with_context(|| format!("write {path}"))?;
    }

    match format {
        "json" => print!("{}", serialize_report(&output.report)?),
        "text" => print!("{}", render_text(&output.report)),
        other => anyhow::bail!("unknown format: {other} (expected text|json)"),
    }

    std::process::exit(verdict_exit_code(output.report.verdict));
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(report_path.as_std_path())
        .with_context(|| format!("read {report_path}"))?;
    let report = parse_report_json(&text)?;

    for annotation in render_annotations(&report, max) {
        println!("{annotation}");
    }
    Ok(())
}

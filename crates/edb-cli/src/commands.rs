//! Command implementations for the edblint CLI.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use edb_ingest::{DEFAULT_EXTENSIONS, DbLoader};
use edb_lint::RuleEngine;
use edb_model::LintOutcome;
use edb_report::{write_json_report, write_junit_report};

use crate::cli::{CheckArgs, ReportFormatArg};

/// Everything the summary printer needs from one `check` run.
pub struct CheckResult {
    pub outcome: LintOutcome,
    pub file_count: usize,
    pub record_count: usize,
    pub report_paths: Vec<PathBuf>,
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let extensions: Vec<String> = if args.extensions.is_empty() {
        DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect()
    } else {
        args.extensions.clone()
    };

    let mut loader = DbLoader::new();
    for dir in &args.input_dirs {
        for extension in &extensions {
            loader
                .load_files(dir, extension)
                .with_context(|| format!("discover .{extension} files under {}", dir.display()))?;
        }
    }
    info!(files = loader.file_count(), "EPICS db files found");

    // Phase barrier: the corpus is fully built before any rule reads it.
    let corpus = loader.parse_files();
    info!(records = corpus.len(), "records parsed");
    if corpus.is_empty() {
        warn!("no records found; check the input directories and extensions");
    }

    let engine = RuleEngine::with_default_rules();
    let outcome = engine.run(&corpus);

    let mut report_paths = Vec::new();
    match args.report {
        ReportFormatArg::Xml => {
            report_paths.push(write_junit_report(&args.output_dir, &outcome)?);
        }
        ReportFormatArg::Json => {
            report_paths.push(write_json_report(&args.output_dir, &outcome)?);
        }
        ReportFormatArg::Both => {
            report_paths.push(write_junit_report(&args.output_dir, &outcome)?);
            report_paths.push(write_json_report(&args.output_dir, &outcome)?);
        }
        ReportFormatArg::None => {}
    }

    Ok(CheckResult {
        outcome,
        file_count: loader.file_count(),
        record_count: corpus.len(),
        report_paths,
    })
}

pub fn run_rules() -> Result<()> {
    let engine = RuleEngine::with_default_rules();
    for rule in engine.rules() {
        println!("{:<20} {}", rule.name(), rule.description());
    }
    Ok(())
}

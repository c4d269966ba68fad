//! Versioned JSON report output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use edb_model::{LintOutcome, RuleReport};

const REPORT_SCHEMA: &str = "edblint.lint-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct LintReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub passed: bool,
    pub reports: Vec<RuleSummary<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RuleSummary<'a> {
    pub rule: &'a str,
    pub passed: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub issues: &'a [edb_model::LintIssue],
}

/// Write `lint_report.json` into `output_dir`, returning the written path.
pub fn write_json_report(output_dir: &Path, outcome: &LintOutcome) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create report directory {}", output_dir.display()))?;
    let output_path = output_dir.join("lint_report.json");
    let payload = LintReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        passed: outcome.passed(),
        reports: outcome.reports.iter().map(rule_summary).collect(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(output_path)
}

fn rule_summary(report: &RuleReport) -> RuleSummary<'_> {
    RuleSummary {
        rule: &report.rule,
        passed: report.passed(),
        error_count: report.error_count(),
        warning_count: report.warning_count(),
        issues: &report.issues,
    }
}

//! JUnit-style XML report output.
//!
//! One `<testsuite>` for the run, one `<testcase>` per rule; failed rules
//! carry a `<failure>` element listing their Error-class messages. The
//! format is the minimal subset CI JUnit ingesters agree on.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use edb_model::{IssueSeverity, LintOutcome, RuleReport};

const SUITE_NAME: &str = "edblint";

/// Write `lint_report.xml` into `output_dir`, returning the written path.
pub fn write_junit_report(output_dir: &Path, outcome: &LintOutcome) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create report directory {}", output_dir.display()))?;
    let output_path = output_dir.join("lint_report.xml");
    let file = File::create(&output_path)
        .with_context(|| format!("create {}", output_path.display()))?;
    let mut xml = Writer::new_with_indent(BufWriter::new(file), b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let failures = outcome
        .reports
        .iter()
        .filter(|report| !report.passed())
        .count();
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut suite = BytesStart::new("testsuite");
    suite.push_attribute(("name", SUITE_NAME));
    suite.push_attribute(("tests", outcome.reports.len().to_string().as_str()));
    suite.push_attribute(("failures", failures.to_string().as_str()));
    suite.push_attribute(("timestamp", timestamp.as_str()));
    xml.write_event(Event::Start(suite))?;

    for report in &outcome.reports {
        write_testcase(&mut xml, report)?;
    }

    xml.write_event(Event::End(BytesEnd::new("testsuite")))?;
    Ok(output_path)
}

fn write_testcase<W: Write>(xml: &mut Writer<W>, report: &RuleReport) -> Result<()> {
    let mut case = BytesStart::new("testcase");
    case.push_attribute(("name", report.rule.as_str()));
    case.push_attribute(("classname", SUITE_NAME));

    if report.passed() {
        xml.write_event(Event::Empty(case))?;
        return Ok(());
    }

    xml.write_event(Event::Start(case))?;
    let mut failure = BytesStart::new("failure");
    let message = format!("{} error(s)", report.error_count());
    failure.push_attribute(("message", message.as_str()));
    xml.write_event(Event::Start(failure))?;

    let detail = report
        .issues
        .iter()
        .filter(|issue| issue.severity == IssueSeverity::Error)
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    xml.write_event(Event::Text(BytesText::new(&detail)))?;

    xml.write_event(Event::End(BytesEnd::new("failure")))?;
    xml.write_event(Event::End(BytesEnd::new("testcase")))?;
    Ok(())
}

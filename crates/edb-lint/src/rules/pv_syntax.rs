//! Interesting pv names use the house character set and casing.

use edb_model::{LintIssue, Record, strip_macros};

use crate::engine::LintRule;

pub struct PvSyntax;

impl LintRule for PvSyntax {
    fn name(&self) -> &'static str {
        "pv-syntax"
    }

    fn description(&self) -> &'static str {
        "interesting pv names are upper-case and use only A-Z, 0-9, _ and :"
    }

    fn check(&self, corpus: &[Record]) -> Vec<LintIssue> {
        let mut issues = Vec::new();
        for record in corpus {
            if !record.is_interest() {
                continue;
            }
            let stripped = strip_macros(record.pv());
            if let Some(bad) = stripped.chars().find(|ch| !is_pv_char(*ch)) {
                issues.push(
                    LintIssue::error(format!(
                        "{} contains illegal character {bad:?}",
                        record.pv()
                    ))
                    .with_record(record),
                );
            }
            if !stripped.is_empty() && stripped.chars().any(|ch| ch.is_ascii_lowercase()) {
                issues.push(
                    LintIssue::warning(format!("{} should be upper-case", record.pv()))
                        .with_record(record),
                );
            }
        }
        issues
    }
}

fn is_pv_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == ':'
}

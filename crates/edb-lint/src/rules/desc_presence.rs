//! Interesting records must have exactly one description.

use edb_model::{LintIssue, Record};

use crate::engine::LintRule;

pub struct DescriptionPresence;

impl LintRule for DescriptionPresence {
    fn name(&self) -> &'static str {
        "description-present"
    }

    fn description(&self) -> &'static str {
        "interesting records carry exactly one DESC field"
    }

    fn check(&self, corpus: &[Record]) -> Vec<LintIssue> {
        let mut issues = Vec::new();
        for record in corpus {
            if !record.is_interest() {
                continue;
            }
            match record.get_field("DESC").len() {
                1 => {}
                0 => issues.push(
                    LintIssue::error(format!("Missing description on {record}"))
                        .with_record(record),
                ),
                _ => issues.push(
                    LintIssue::error(format!("Duplicate description on {record}"))
                        .with_record(record),
                ),
            }
        }
        issues
    }
}

//! Interesting numeric records must carry engineering units.

use edb_model::{LintIssue, Record};

use crate::engine::LintRule;

/// Record types whose interesting instances must define `EGU`.
const EGU_REQUIRED_TYPES: &[&str] = &["ai", "ao", "longin", "longout"];

pub struct UnitsPresent;

impl LintRule for UnitsPresent {
    fn name(&self) -> &'static str {
        "units-present"
    }

    fn description(&self) -> &'static str {
        "interesting numeric records define an EGU field"
    }

    fn check(&self, corpus: &[Record]) -> Vec<LintIssue> {
        let mut issues = Vec::new();
        for record in corpus {
            if !record.is_interest() || record.is_disable() {
                continue;
            }
            if !EGU_REQUIRED_TYPES.contains(&record.record_type()) {
                continue;
            }
            let units = record.get_field("EGU");
            if units.is_empty() {
                issues.push(
                    LintIssue::error(format!("Missing units on {record}")).with_record(record),
                );
            } else if units[0].is_empty() {
                issues.push(
                    LintIssue::warning(format!("Blank units on {record}")).with_record(record),
                );
            }
        }
        issues
    }
}

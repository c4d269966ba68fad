//! Single EGU values must conform to the allowed-unit standard.

use std::collections::BTreeMap;

use edb_model::{LintIssue, Record};
use tracing::debug;

use crate::engine::LintRule;
use crate::units::is_allowed_unit;

pub struct UnitsValid;

impl LintRule for UnitsValid {
    fn name(&self) -> &'static str {
        "units-valid"
    }

    fn description(&self) -> &'static str {
        "EGU values conform to the allowed engineering-unit standard"
    }

    fn check(&self, corpus: &[Record]) -> Vec<LintIssue> {
        let mut issues = Vec::new();

        // Records grouped by unit literal. Grouping is for reporting only
        // and never affects pass/fail.
        let mut by_unit: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();

        for record in corpus {
            let units = record.get_field("EGU");
            if units.len() > 1 {
                issues.push(
                    LintIssue::warning(format!("Multiple units on {record}")).with_record(record),
                );
                continue;
            }
            if units.len() == 1 && !units[0].is_empty() {
                by_unit.entry(units[0]).or_default().push(record);
            }
        }

        debug!(distinct_units = by_unit.len(), "units collected across corpus");

        for (unit, records) in &by_unit {
            if is_allowed_unit(unit) {
                continue;
            }
            for record in records {
                issues.push(
                    LintIssue::error(format!("Invalid units ({unit}) on {record}"))
                        .with_record(record),
                );
            }
        }

        issues
    }
}

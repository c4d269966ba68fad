//! Descriptions must fit the 40-character DESC field limit.

use edb_model::{LintIssue, Record, strip_macros};

use crate::engine::LintRule;

/// Maximum DESC length after macro stripping.
const DESC_MAX_LENGTH: usize = 40;

pub struct DescriptionLength;

impl LintRule for DescriptionLength {
    fn name(&self) -> &'static str {
        "description-length"
    }

    fn description(&self) -> &'static str {
        "DESC values are at most 40 characters once macros are stripped"
    }

    fn check(&self, corpus: &[Record]) -> Vec<LintIssue> {
        let mut issues = Vec::new();
        for record in corpus {
            for desc in record.get_field("DESC") {
                // Macros expand at deploy time; only the literal text counts.
                let stripped = strip_macros(desc);
                let length = stripped.chars().count();
                if length > DESC_MAX_LENGTH {
                    issues.push(
                        LintIssue::error(format!(
                            "Description too long on {record} ({length} chars)"
                        ))
                        .with_record(record),
                    );
                }
            }
        }
        issues
    }
}

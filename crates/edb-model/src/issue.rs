use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A single violation found during rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintIssue {
    /// Severity level.
    pub severity: IssueSeverity,
    /// Human-readable message describing the violation.
    pub message: String,
    /// Display identity of the offending record, when one is at fault.
    pub record: Option<String>,
}

impl LintIssue {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            message: message.into(),
            record: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            message: message.into(),
            record: None,
        }
    }

    #[must_use]
    pub fn with_record(mut self, record: &Record) -> Self {
        self.record = Some(record.to_string());
        self
    }
}

/// Result of one rule evaluated over the whole corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleReport {
    pub rule: String,
    pub issues: Vec<LintIssue>,
}

impl RuleReport {
    pub fn new(rule: impl Into<String>, issues: Vec<LintIssue>) -> Self {
        Self {
            rule: rule.into(),
            issues,
        }
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    /// A rule passes when it produced no Error-class issues. Warnings are
    /// reported but never fail the rule.
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }
}

/// Aggregate outcome across every rule in one engine run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintOutcome {
    pub reports: Vec<RuleReport>,
}

impl LintOutcome {
    pub fn passed(&self) -> bool {
        self.reports.iter().all(RuleReport::passed)
    }

    pub fn error_count(&self) -> usize {
        self.reports.iter().map(RuleReport::error_count).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.reports.iter().map(RuleReport::warning_count).sum()
    }
}

pub mod issue;
pub mod record;
pub mod text;

pub use issue::{IssueSeverity, LintIssue, LintOutcome, RuleReport};
pub use record::{Field, Record};
pub use text::strip_macros;

#[cfg(test)]
mod tests {
    use super::{IssueSeverity, LintIssue, LintOutcome, RuleReport};

    #[test]
    fn rule_report_counts() {
        let report = RuleReport::new(
            "units-present",
            vec![
                LintIssue::error("Missing units on TEST\\PV1"),
                LintIssue::warning("Blank units on TEST\\PV2"),
            ],
        );
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(!report.passed());
    }

    #[test]
    fn outcome_aggregates_over_rules() {
        let outcome = LintOutcome {
            reports: vec![
                RuleReport::new("description-length", vec![]),
                RuleReport::new("pv-syntax", vec![LintIssue::warning("lower-case pv")]),
            ],
        };
        assert!(outcome.passed());
        assert_eq!(outcome.warning_count(), 1);
    }

    #[test]
    fn issue_serializes() {
        let issue = LintIssue::error("Invalid units (furlong)");
        let json = serde_json::to_string(&issue).expect("serialize issue");
        let round: LintIssue = serde_json::from_str(&json).expect("deserialize issue");
        assert_eq!(round.severity, IssueSeverity::Error);
        assert_eq!(round, issue);
    }
}

//! Rule engine running independent lint rules over a read-only corpus.

use edb_model::{LintIssue, LintOutcome, Record, RuleReport};
use tracing::debug;

use crate::rules::default_rules;

/// One independent check over the whole record corpus.
///
/// Rules are stateless and order-insensitive with respect to each other;
/// the engine may run them in any order without changing the outcome.
pub trait LintRule {
    /// Stable rule name used in reports.
    fn name(&self) -> &'static str;

    /// One-line description of what the rule enforces.
    fn description(&self) -> &'static str;

    /// Evaluate the rule, returning every violation it found.
    fn check(&self, corpus: &[Record]) -> Vec<LintIssue>;
}

/// Runs a set of rules and aggregates their reports.
#[derive(Default)]
pub struct RuleEngine {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleEngine {
    /// An engine with no rules registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine carrying the full house rule set.
    pub fn with_default_rules() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Run every rule against the corpus. The corpus is read-only; running
    /// twice over the same corpus yields an identical outcome.
    pub fn run(&self, corpus: &[Record]) -> LintOutcome {
        let mut reports = Vec::new();
        for rule in &self.rules {
            let issues = rule.check(corpus);
            debug!(rule = rule.name(), issues = issues.len(), "rule evaluated");
            reports.push(RuleReport::new(rule.name(), issues));
        }
        LintOutcome { reports }
    }
}

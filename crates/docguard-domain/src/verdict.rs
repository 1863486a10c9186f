//! Verdict module - rule outcomes and the report that collects them

use crate::diagnostics::Diagnostic;
use std::fmt;

/// The business rules run against every extraction record
///
/// The declaration order is the presentation order of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Policy end date must be strictly after the start date
    DateConsistency,

    /// Insured value must be a positive number
    ValueCheck,

    /// Vessel must be on the approved list
    VesselNameMatch,

    /// Policy number must be present
    CompletenessCheck,
}

impl Rule {
    /// All rules in report order
    pub const ALL: [Rule; 4] = [
        Rule::DateConsistency,
        Rule::ValueCheck,
        Rule::VesselNameMatch,
        Rule::CompletenessCheck,
    ];

    /// Human-readable rule name
    pub fn name(&self) -> &'static str {
        match self {
            Rule::DateConsistency => "Date Consistency",
            Rule::ValueCheck => "Value Check",
            Rule::VesselNameMatch => "Vessel Name Match",
            Rule::CompletenessCheck => "Completeness Check",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Rule satisfied
    Pass,

    /// Rule violated, or its input could not be interpreted
    Fail,
}

impl Status {
    /// Wire representation (`PASS` / `FAIL`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Which rule produced this verdict
    pub rule: Rule,

    /// PASS or FAIL
    pub status: Status,

    /// Explanation for humans, not meant to be parsed
    pub message: String,
}

impl Verdict {
    /// Passing verdict
    pub fn pass(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            status: Status::Pass,
            message: message.into(),
        }
    }

    /// Failing verdict
    pub fn fail(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            status: Status::Fail,
            message: message.into(),
        }
    }

    /// Whether the rule passed
    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }
}

/// Verdicts of all rules for one record, in [`Rule::ALL`] order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    verdicts: Vec<Verdict>,
    diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Assemble a report from verdicts and the diagnostics gathered while producing them
    pub fn new(verdicts: Vec<Verdict>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            verdicts,
            diagnostics,
        }
    }

    /// Verdicts in report order
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Non-fatal parse notes collected during evaluation
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Verdict for a given rule
    pub fn verdict(&self, rule: Rule) -> Option<&Verdict> {
        self.verdicts.iter().find(|v| v.rule == rule)
    }

    /// Whether every rule passed
    pub fn all_passed(&self) -> bool {
        self.verdicts.iter().all(Verdict::passed)
    }

    /// Failing verdicts only
    pub fn failures(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.passed())
    }
}

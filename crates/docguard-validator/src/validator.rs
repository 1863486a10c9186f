//! Validation runner

use crate::rules::evaluate;
use docguard_domain::{ApprovedVessels, Diagnostics, ExtractionRecord, Rule, ValidationReport};

/// Run every rule against `record` in report order
///
/// Always returns one verdict per [`Rule`]; rules never see each other's
/// outcome.
pub fn run_all_validations(record: &ExtractionRecord, vessels: &ApprovedVessels) -> ValidationReport {
    let mut diagnostics = Diagnostics::new();
    let verdicts = Rule::ALL
        .iter()
        .map(|rule| evaluate(*rule, record, vessels, &mut diagnostics))
        .collect();

    ValidationReport::new(verdicts, diagnostics.into_entries())
}

/// Validates extraction records against a fixed approved-vessel list
#[derive(Debug, Clone, Default)]
pub struct Validator {
    vessels: ApprovedVessels,
}

impl Validator {
    /// Create a validator for the given approved vessels
    pub fn new(vessels: ApprovedVessels) -> Self {
        Self { vessels }
    }

    /// Approved vessels this validator matches against
    pub fn vessels(&self) -> &ApprovedVessels {
        &self.vessels
    }

    /// Validate a record
    pub fn validate(&self, record: &ExtractionRecord) -> ValidationReport {
        run_all_validations(record, &self.vessels)
    }
}

//! Docguard Domain Layer
//!
//! This crate contains the data model shared by every other Docguard crate.
//! Apart from `chrono` for calendar dates it has no external dependencies and
//! holds no I/O, logging or configuration concerns.
//!
//! ## Key Concepts
//!
//! - **Extraction Record**: the five optional fields pulled out of an insurance document
//! - **Verdict**: PASS/FAIL outcome plus message for one business rule
//! - **Validation Report**: the ordered verdicts of all rules for one document
//! - **Approved Vessels**: reference list of vessel names used for membership checks
//! - **Diagnostics**: non-fatal notes about inputs that could not be parsed

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod diagnostics;
pub mod record;
pub mod verdict;
pub mod vessels;

// Re-exports for convenience
pub use diagnostics::{Diagnostic, Diagnostics};
pub use record::{DateInput, ExtractionRecord, InsuredValue};
pub use verdict::{Rule, Status, ValidationReport, Verdict};
pub use vessels::ApprovedVessels;

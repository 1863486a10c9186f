//! Docguard Validator
//!
//! Deterministic business rules run against an extraction record.
//!
//! The validator provides:
//! - Date consistency (policy end strictly after start)
//! - Value check (insured value is a positive number)
//! - Vessel name match (case/whitespace-insensitive membership)
//! - Completeness check (policy number present)
//!
//! Every rule always yields a verdict. Malformed input becomes a FAIL, never
//! an error, so a report always has four entries.
//!
//! # Examples
//!
//! ```
//! use docguard_domain::{ApprovedVessels, ExtractionRecord};
//! use docguard_validator::Validator;
//!
//! let validator = Validator::new(ApprovedVessels::new(["MV Neptune"]));
//! let record = ExtractionRecord::new()
//!     .with_policy_number("HM-001")
//!     .with_vessel_name("mv neptune")
//!     .with_start_date("2025-11-01")
//!     .with_end_date("2026-10-31")
//!     .with_insured_value(1000_i64);
//!
//! let report = validator.validate(&record);
//! assert!(report.all_passed());
//! ```

#![warn(missing_docs)]

mod dates;
mod rules;
mod validator;

pub use dates::parse_date;
pub use rules::{completeness_check, date_consistency, evaluate, value_check, vessel_name_match};
pub use validator::{run_all_validations, Validator};

//! Wire types for the HTTP API and their conversions from domain types.

use docguard_domain::{DateInput, ExtractionRecord, InsuredValue, ValidationReport, Verdict};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Body of `POST /validate`
#[derive(Debug, Deserialize, ToSchema)]
pub struct DocumentRequest {
    /// The raw text content of the insurance document
    pub document_text: String,
}

/// Extracted fields as returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExtractedData {
    /// Policy identifier
    pub policy_number: Option<String>,
    /// Vessel name
    pub vessel_name: Option<String>,
    /// Start date as extracted
    pub policy_start_date: Option<String>,
    /// End date as extracted
    pub policy_end_date: Option<String>,
    /// Insured value as extracted (number or string)
    pub insured_value: Option<Value>,
}

/// One rule outcome on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VerdictBody {
    /// Rule name
    pub rule: String,
    /// `PASS` or `FAIL`
    pub status: String,
    /// Explanation
    pub message: String,
}

/// Response of the validation endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationResponse {
    /// Fields the verdicts were computed from
    pub extracted_data: ExtractedData,
    /// Verdicts in rule order
    pub validation_results: Vec<VerdictBody>,
}

impl ValidationResponse {
    /// Build the response for a record and its report
    pub fn new(record: &ExtractionRecord, report: &ValidationReport) -> Self {
        Self {
            extracted_data: ExtractedData::from(record),
            validation_results: report.verdicts().iter().map(VerdictBody::from).collect(),
        }
    }
}

impl From<&Verdict> for VerdictBody {
    fn from(verdict: &Verdict) -> Self {
        Self {
            rule: verdict.rule.name().to_string(),
            status: verdict.status.as_str().to_string(),
            message: verdict.message.clone(),
        }
    }
}

impl From<&ExtractionRecord> for ExtractedData {
    fn from(record: &ExtractionRecord) -> Self {
        Self {
            policy_number: record.policy_number.clone(),
            vessel_name: record.vessel_name.clone(),
            policy_start_date: record.policy_start_date.as_ref().map(date_to_wire),
            policy_end_date: record.policy_end_date.as_ref().map(date_to_wire),
            insured_value: record.insured_value.as_ref().map(value_to_wire),
        }
    }
}

fn date_to_wire(date: &DateInput) -> String {
    match date {
        DateInput::Date(d) => d.to_string(),
        DateInput::DateTime(dt) => dt.date().to_string(),
        DateInput::Text(s) => s.clone(),
    }
}

fn value_to_wire(value: &InsuredValue) -> Value {
    match value {
        InsuredValue::Integer(n) => Value::from(*n),
        InsuredValue::Decimal(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        InsuredValue::Text(s) => Value::String(s.clone()),
    }
}

//! Extraction record - the structured fields of one insurance document

use chrono::{NaiveDate, NaiveDateTime};

/// A date field as delivered by the extraction step
///
/// Models either hand back an already-structured value or a string that
/// still has to be parsed. Parsing happens in the validator, so an
/// unparseable string is carried here untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// A calendar date
    Date(NaiveDate),

    /// A date with a time component (the time is ignored by the rules)
    DateTime(NaiveDateTime),

    /// Raw text, expected in `YYYY-MM-DD` form
    Text(String),
}

impl DateInput {
    /// Wrap raw text as a date input
    pub fn text(value: impl Into<String>) -> Self {
        DateInput::Text(value.into())
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(datetime: NaiveDateTime) -> Self {
        DateInput::DateTime(datetime)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

/// Insured value as delivered by the extraction step
#[derive(Debug, Clone, PartialEq)]
pub enum InsuredValue {
    /// Whole number
    Integer(i64),

    /// Decimal number
    Decimal(f64),

    /// Text that may or may not hold a number
    Text(String),
}

impl InsuredValue {
    /// Coerce to a number
    ///
    /// Text is trimmed before parsing. Returns `None` when the text is not
    /// a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            InsuredValue::Integer(n) => Some(*n as f64),
            InsuredValue::Decimal(n) => Some(*n),
            InsuredValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl From<i64> for InsuredValue {
    fn from(value: i64) -> Self {
        InsuredValue::Integer(value)
    }
}

impl From<f64> for InsuredValue {
    fn from(value: f64) -> Self {
        InsuredValue::Decimal(value)
    }
}

impl From<&str> for InsuredValue {
    fn from(value: &str) -> Self {
        InsuredValue::Text(value.to_string())
    }
}

/// Fields extracted from one insurance document
///
/// Every field may be absent. Text fields, when present, may still be empty
/// or whitespace-only; the rules decide what that means.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionRecord {
    /// Policy identifier
    pub policy_number: Option<String>,

    /// Name of the insured vessel
    pub vessel_name: Option<String>,

    /// First day of cover
    pub policy_start_date: Option<DateInput>,

    /// Last day of cover
    pub policy_end_date: Option<DateInput>,

    /// Sum insured
    pub insured_value: Option<InsuredValue>,
}

impl ExtractionRecord {
    /// Create an empty record (all fields absent)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy number
    pub fn with_policy_number(mut self, value: impl Into<String>) -> Self {
        self.policy_number = Some(value.into());
        self
    }

    /// Set the vessel name
    pub fn with_vessel_name(mut self, value: impl Into<String>) -> Self {
        self.vessel_name = Some(value.into());
        self
    }

    /// Set the policy start date
    pub fn with_start_date(mut self, value: impl Into<DateInput>) -> Self {
        self.policy_start_date = Some(value.into());
        self
    }

    /// Set the policy end date
    pub fn with_end_date(mut self, value: impl Into<DateInput>) -> Self {
        self.policy_end_date = Some(value.into());
        self
    }

    /// Set the insured value
    pub fn with_insured_value(mut self, value: impl Into<InsuredValue>) -> Self {
        self.insured_value = Some(value.into());
        self
    }
}

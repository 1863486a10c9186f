//! Parse LLM output into an extraction record

use crate::error::ExtractorError;
use docguard_domain::{DateInput, ExtractionRecord, InsuredValue};
use serde_json::{Map, Value};

/// Parse an LLM response into an extraction record
///
/// The response must hold a single JSON object, optionally wrapped in a
/// markdown code block.
pub fn parse_llm_response(response: &str) -> Result<ExtractionRecord, ExtractorError> {
    let json_str = extract_json(response);
    let json: Value = serde_json::from_str(json_str)?;
    record_from_json(&json)
}

/// Strip a surrounding markdown code block, if any
///
/// LLMs sometimes wrap JSON in ```` ```json ... ``` ```` even when told not to.
fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let without_close = without_open
        .trim_end()
        .strip_suffix("```")
        .unwrap_or(without_open);

    without_close.trim()
}

/// Build an extraction record from a JSON object
///
/// Missing keys and `null` become absent fields; unknown keys are ignored.
/// Text and date fields must be strings and `insured_value` must be a number
/// or a string. Anything else is a schema error naming the field.
pub fn record_from_json(json: &Value) -> Result<ExtractionRecord, ExtractorError> {
    let obj = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat("Expected JSON object".to_string()))?;

    Ok(ExtractionRecord {
        policy_number: text_field(obj, "policy_number")?,
        vessel_name: text_field(obj, "vessel_name")?,
        policy_start_date: text_field(obj, "policy_start_date")?.map(DateInput::Text),
        policy_end_date: text_field(obj, "policy_end_date")?.map(DateInput::Text),
        insured_value: value_field(obj, "insured_value")?,
    })
}

fn text_field(obj: &Map<String, Value>, field: &str) -> Result<Option<String>, ExtractorError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(schema_error(field, "string or null", other)),
    }
}

fn value_field(
    obj: &Map<String, Value>,
    field: &str,
) -> Result<Option<InsuredValue>, ExtractorError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(InsuredValue::Text(s.clone()))),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok(Some(InsuredValue::Integer(i))),
            (None, Some(f)) => Ok(Some(InsuredValue::Decimal(f))),
            (None, None) => Err(ExtractorError::Schema(format!(
                "field '{}': number {} is out of range",
                field, n
            ))),
        },
        Some(other) => Err(schema_error(field, "number, string or null", other)),
    }
}

fn schema_error(field: &str, expected: &str, found: &Value) -> ExtractorError {
    ExtractorError::Schema(format!(
        "field '{}': expected {}, found {}",
        field,
        expected,
        json_type(found)
    ))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

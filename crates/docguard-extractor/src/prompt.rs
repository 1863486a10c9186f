//! LLM prompt for insurance field extraction

/// Builds the extraction prompt for one document
pub struct PromptBuilder {
    text: String,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::with_capacity(
            EXTRACTION_INSTRUCTIONS.len() + self.text.len() + 32,
        );

        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\nDocument text:\n\"\"\"\n");
        prompt.push_str(&self.text);
        prompt.push_str("\n\"\"\"\n");

        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"You are an expert insurance document parser. Read the document below and return a single JSON object with exactly these keys and no others:

{
  "policy_number": string or null,
  "vessel_name": string or null,
  "policy_start_date": "YYYY-MM-DD" or null,
  "policy_end_date": "YYYY-MM-DD" or null,
  "insured_value": number or null
}

Rules:
- Use null for any field that is absent or cannot be extracted with confidence
- Convert dates to ISO format YYYY-MM-DD whenever possible
- insured_value is a bare number (e.g., 1000000): drop currency symbols, thousands separators and words
- Output only the JSON object, with no explanation before or after it"#;

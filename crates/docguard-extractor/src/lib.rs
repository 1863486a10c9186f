//! Docguard Extractor
//!
//! Converts insurance document text into an [`ExtractionRecord`] using an LLM.
//!
//! # Architecture
//!
//! ```text
//! Text → PromptBuilder → LlmProvider → parser → ExtractionRecord
//! ```
//!
//! The parser is the structural gate: model output that is not a JSON object,
//! or whose fields have the wrong JSON types, is rejected here so the
//! validator only ever sees a well-typed record.
//!
//! # Example Usage
//!
//! ```
//! use docguard_extractor::{Extractor, ExtractorConfig};
//! use docguard_llm::MockProvider;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(r#"{"policy_number": "HM-001", "insured_value": 1000}"#);
//! let extractor = Extractor::new(llm, ExtractorConfig::default());
//!
//! let record = extractor.extract("Policy HM-001 insures ...").await?;
//! assert_eq!(record.policy_number.as_deref(), Some("HM-001"));
//! # Ok(())
//! # }
//! ```
//!
//! [`ExtractionRecord`]: docguard_domain::ExtractionRecord

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use parser::{parse_llm_response, record_from_json};
pub use prompt::PromptBuilder;

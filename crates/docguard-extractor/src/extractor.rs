//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_llm_response;
use crate::prompt::PromptBuilder;
use docguard_domain::ExtractionRecord;
use docguard_llm::LlmProvider;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info};

/// The Extractor turns document text into an extraction record via an LLM
pub struct Extractor {
    llm_provider: Arc<dyn LlmProvider>,
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(llm_provider: impl LlmProvider + 'static, config: ExtractorConfig) -> Self {
        Self::from_shared(Arc::new(llm_provider), config)
    }

    /// Create a new Extractor over an already shared provider
    pub fn from_shared(llm_provider: Arc<dyn LlmProvider>, config: ExtractorConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// Name of the model used for extraction
    pub fn model_name(&self) -> &str {
        self.llm_provider.model_name()
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the insurance fields from `text`
    ///
    /// The model call is bounded by the configured extraction timeout. The
    /// returned record is structurally valid; field semantics are left to the
    /// validator.
    pub async fn extract(&self, text: &str) -> Result<ExtractionRecord, ExtractorError> {
        if text.trim().is_empty() {
            return Err(ExtractorError::EmptyText);
        }

        let length = text.chars().count();
        if length > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(
                length,
                self.config.max_text_length,
            ));
        }

        info!(
            "Starting extraction with model '{}', text length {}",
            self.model_name(),
            length
        );

        let prompt = PromptBuilder::new(text).build();
        debug!("Prompt length: {} chars", prompt.len());

        let llm_response = timeout(
            self.config.extraction_timeout(),
            self.llm_provider.generate(&prompt),
        )
        .await
        .map_err(|_| ExtractorError::Timeout)??;

        debug!("LLM response length: {} chars", llm_response.len());

        let record = parse_llm_response(&llm_response)?;

        info!("Extraction complete");
        Ok(record)
    }
}

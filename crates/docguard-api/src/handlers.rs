//! HTTP request handlers for the API service.
//!
//! Implements document validation, direct record validation, a welcome page,
//! a health check and the OpenAPI document using axum.

use crate::dto::{DocumentRequest, ExtractedData, ValidationResponse};
use crate::openapi;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use docguard_domain::{ExtractionRecord, ValidationReport};
use docguard_extractor::{record_from_json, Extractor, ExtractorError};
use docguard_validator::Validator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Turns document text into extraction records
    pub extractor: Arc<Extractor>,
    /// Runs the business rules
    pub validator: Arc<Validator>,
}

impl AppState {
    /// Create state from an extractor and a validator
    pub fn new(extractor: Extractor, validator: Validator) -> Self {
        Self {
            extractor: Arc::new(extractor),
            validator: Arc::new(validator),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Model used for extraction
    pub model: String,
    /// Number of approved vessel entries loaded
    pub approved_vessels: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub detail: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Extraction from document text failed
    Extraction(ExtractorError),
    /// A directly submitted record has the wrong shape
    InvalidRecord(ExtractorError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Extraction(e) => match e {
                ExtractorError::EmptyText | ExtractorError::TextTooLong(..) => {
                    (StatusCode::BAD_REQUEST, e.to_string())
                }
                ExtractorError::Schema(_) => (
                    StatusCode::BAD_REQUEST,
                    format!("AI output did not match expected schema: {}", e),
                ),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("AI service failed: {}", e),
                ),
            },
            AppError::InvalidRecord(e) => (
                StatusCode::BAD_REQUEST,
                format!("Extraction record did not match expected schema: {}", e),
            ),
        };

        if status.is_server_error() {
            error!("{}", message);
        } else {
            warn!("{}", message);
        }

        let body = Json(ErrorResponse { detail: message });
        (status, body).into_response()
    }
}

impl From<ExtractorError> for AppError {
    fn from(e: ExtractorError) -> Self {
        AppError::Extraction(e)
    }
}

/// Run the rules and log any parse diagnostics
fn validate_record(validator: &Validator, record: &ExtractionRecord) -> ValidationReport {
    let report = validator.validate(record);

    for diagnostic in report.diagnostics() {
        warn!("{}", diagnostic);
    }
    info!(
        "Validation complete: {} of {} rules failed",
        report.failures().count(),
        report.verdicts().len()
    );

    report
}

/// GET / - Welcome page
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "HTML welcome page", body = String, content_type = "text/html")),
    tag = "service"
)]
async fn root() -> Html<&'static str> {
    Html(WELCOME_PAGE)
}

/// GET /health - Service health
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthCheckResponse)),
    tag = "service"
)]
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        model: state.extractor.model_name().to_string(),
        approved_vessels: state.validator.vessels().len(),
    })
}

/// POST /validate - Extract fields from document text and validate them
#[utoipa::path(
    post,
    path = "/validate",
    request_body = DocumentRequest,
    responses(
        (status = 200, description = "Extracted fields and rule verdicts", body = ValidationResponse),
        (status = 400, description = "Bad document text or model output with the wrong shape", body = ErrorResponse),
        (status = 500, description = "Model call failed or returned unreadable output", body = ErrorResponse),
    ),
    tag = "validation"
)]
async fn validate_document(
    State(state): State<AppState>,
    Json(request): Json<DocumentRequest>,
) -> Result<Json<ValidationResponse>, AppError> {
    let record = state.extractor.extract(&request.document_text).await?;
    let report = validate_record(&state.validator, &record);

    Ok(Json(ValidationResponse::new(&record, &report)))
}

/// POST /validate/extracted - Validate an already extracted record
#[utoipa::path(
    post,
    path = "/validate/extracted",
    request_body = ExtractedData,
    responses(
        (status = 200, description = "Rule verdicts for the submitted record", body = ValidationResponse),
        (status = 400, description = "Record has the wrong shape", body = ErrorResponse),
    ),
    tag = "validation"
)]
async fn validate_extracted(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ValidationResponse>, AppError> {
    let record = record_from_json(&body).map_err(AppError::InvalidRecord)?;
    let report = validate_record(&state.validator, &record);

    Ok(Json(ValidationResponse::new(&record, &report)))
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/validate", post(validate_document))
        .route("/validate/extracted", post(validate_extracted))
        .merge(openapi::router())
        .with_state(state)
}

const WELCOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>Insurance Document Validator</title>
    </head>
    <body style="font-family: Arial, sans-serif; text-align: center; padding: 50px;">
        <h1>Insurance Document Validator</h1>
        <p>Send <code>POST /validate</code> with <code>{"document_text": "..."}</code>
           to extract policy fields and run the business rules.</p>
        <p>Already have the fields? Use <code>POST /validate/extracted</code>.</p>
        <p><a href="/openapi.json">API documentation (OpenAPI)</a></p>
        <p><a href="/health">Service health</a></p>
    </body>
</html>
"#;

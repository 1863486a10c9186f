//! OpenAPI document for the HTTP API, served at `/openapi.json`.

use crate::handlers::AppState;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

/// OpenAPI description of every route
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mini Insurance Document Validator",
        description = "An API to validate extracted data from insurance documents using AI."
    ),
    paths(
        crate::handlers::root,
        crate::handlers::health_check,
        crate::handlers::validate_document,
        crate::handlers::validate_extracted,
    ),
    components(schemas(
        crate::dto::DocumentRequest,
        crate::dto::ExtractedData,
        crate::dto::VerdictBody,
        crate::dto::ValidationResponse,
        crate::handlers::HealthCheckResponse,
        crate::handlers::ErrorResponse,
    )),
    tags(
        (name = "validation", description = "Field extraction and business rule checks"),
        (name = "service", description = "Welcome page and health"),
    )
)]
pub struct ApiDoc;

/// Routes serving the OpenAPI document
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json - Generated OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

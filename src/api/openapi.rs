//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::api::error::ApiError;
use crate::api::{estimates, findings, forensics, health, legal, sanitize};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SafeHaven Inspection API",
        description = "Finding normalization, repair cost estimates, tap-test forensics and building code citations"
    ),
    paths(
        health::liveness,
        health::readiness,
        findings::normalize_finding,
        findings::finding_prompt,
        estimates::create_estimate,
        estimates::cost_table,
        forensics::analyze_tap,
        legal::legal_context,
        sanitize::sanitize_text,
    ),
    components(schemas(
        crate::api::error::ErrorResponse,
        crate::model::DefectFinding,
        crate::model::CostEstimate,
        crate::model::SeverityBand,
        crate::model::TapAnalysis,
        crate::model::CodeSection,
        crate::model::LegalContext,
        crate::model::LegalContextStatus,
    )),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "findings", description = "Vision model output normalization"),
        (name = "estimates", description = "Repair cost estimation"),
        (name = "forensics", description = "Audio tap-test analysis"),
        (name = "legal", description = "Building code citations"),
        (name = "sanitize", description = "User input sanitization")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> Result<HttpResponse, ApiError> {
    let yaml = ApiDoc::openapi()
        .to_yaml()
        .map_err(|e| ApiError::Internal(format!("Failed to render OpenAPI YAML: {}", e)))?;

    Ok(HttpResponse::Ok().content_type("text/yaml").body(yaml))
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}

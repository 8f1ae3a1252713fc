//! REST API endpoints for inspection findings

use actix_web::{HttpResponse, Responder, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::DefectFinding;
use crate::service::normalizer::{self, prompts};

/// Raw model output to normalize
#[derive(Debug, Deserialize, ToSchema)]
pub struct NormalizeRequest {
    /// Text returned by the vision model, optionally wrapped in a markdown fence
    pub raw_text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NormalizeResponse {
    /// Always fully populated; the fallback finding when `degraded` is true
    pub finding: DefectFinding,
    pub degraded: bool,
    /// Validation problems that caused the fallback
    pub errors: Vec<String>,
}

/// Query parameters for the extraction prompt
#[derive(Debug, Deserialize, IntoParams)]
pub struct PromptParams {
    /// Room the photo was taken in
    pub room: Option<String>,
    /// Free-text notes from the inspector
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PromptResponse {
    pub system_prompt: String,
    pub prompt: String,
}

/// Normalize raw vision model output into a finding
#[utoipa::path(
    post,
    path = "/v1/findings/normalize",
    request_body = NormalizeRequest,
    responses(
        (status = 200, description = "Finding normalized (possibly to the fallback)", body = NormalizeResponse),
        (status = 400, description = "Malformed request body", body = crate::api::error::ErrorResponse)
    ),
    tag = "findings"
)]
#[post("/v1/findings/normalize")]
pub async fn normalize_finding(request: web::Json<NormalizeRequest>) -> impl Responder {
    let normalized = normalizer::classify(&request.raw_text);
    let degraded = normalized.is_degraded();
    let errors = normalized.errors();

    HttpResponse::Ok().json(NormalizeResponse {
        finding: normalized.into_finding(),
        degraded,
        errors,
    })
}

/// Prompt the vision model should be given for defect extraction
#[utoipa::path(
    get,
    path = "/v1/findings/prompt",
    params(PromptParams),
    responses(
        (status = 200, description = "Extraction prompt", body = PromptResponse)
    ),
    tag = "findings"
)]
#[get("/v1/findings/prompt")]
pub async fn finding_prompt(query: web::Query<PromptParams>) -> impl Responder {
    HttpResponse::Ok().json(PromptResponse {
        system_prompt: prompts::FINDING_SYSTEM_PROMPT.to_string(),
        prompt: prompts::build_finding_prompt(query.room.as_deref(), query.notes.as_deref()),
    })
}

/// Configure finding routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(normalize_finding).service(finding_prompt);
}

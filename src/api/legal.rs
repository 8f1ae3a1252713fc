//! REST API endpoints for building code citations

use actix_web::{HttpResponse, Responder, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::model::LegalContext;
use crate::service::LegalShieldService;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LegalContextRequest {
    /// Defect description, typically the finding's `visual_description`
    pub description: String,
}

/// Find the building code section relevant to a defect
#[utoipa::path(
    post,
    path = "/v1/legal/context",
    request_body = LegalContextRequest,
    responses(
        (status = 200, description = "Legal context (status tells whether a section was cited)", body = LegalContext)
    ),
    tag = "legal"
)]
#[post("/v1/legal/context")]
pub async fn legal_context(
    service: web::Data<LegalShieldService>,
    request: web::Json<LegalContextRequest>,
) -> impl Responder {
    HttpResponse::Ok().json(service.legal_context(&request.description).await)
}

/// Configure legal routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(legal_context);
}

//! REST API endpoint for sanitizing user-supplied text

use actix_web::{HttpResponse, Responder, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::service::InputSanitizer;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SanitizeBody {
    pub text: String,
}

/// Strip script blocks and dangerous tags from text
#[utoipa::path(
    post,
    path = "/v1/sanitize",
    request_body = SanitizeBody,
    responses(
        (status = 200, description = "Sanitized text", body = SanitizeBody)
    ),
    tag = "sanitize"
)]
#[post("/v1/sanitize")]
pub async fn sanitize_text(
    sanitizer: web::Data<InputSanitizer>,
    request: web::Json<SanitizeBody>,
) -> impl Responder {
    HttpResponse::Ok().json(SanitizeBody {
        text: sanitizer.sanitize(&request.text),
    })
}

/// Configure sanitize routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(sanitize_text);
}

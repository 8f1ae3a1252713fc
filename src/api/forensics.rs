//! REST API endpoints for audio forensics

use actix_web::{HttpResponse, Responder, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::model::TapAnalysis;
use crate::service::TapAnalyzer;

/// Per-frame spectral centroids extracted from a tap recording
#[derive(Debug, Deserialize, ToSchema)]
pub struct TapRequest {
    pub centroids_hz: Vec<f64>,
}

/// Classify a wall tap recording as hollow or solid
#[utoipa::path(
    post,
    path = "/v1/forensics/tap",
    request_body = TapRequest,
    responses(
        (status = 200, description = "Tap analysis (metric is \"Error\" when frames were unusable)", body = TapAnalysis)
    ),
    tag = "forensics"
)]
#[post("/v1/forensics/tap")]
pub async fn analyze_tap(
    analyzer: web::Data<TapAnalyzer>,
    request: web::Json<TapRequest>,
) -> impl Responder {
    HttpResponse::Ok().json(analyzer.analyze(&request.centroids_hz))
}

/// Configure forensics routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze_tap);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::json;

    #[actix_web::test]
    async fn test_analyze_tap() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(TapAnalyzer::default()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/forensics/tap")
            .set_json(json!({"centroids_hz": [900.0, 1100.0]}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["risk_detected"], true);
        assert_eq!(body["value_hz"], 1000.0);

        let req = test::TestRequest::post()
            .uri("/v1/forensics/tap")
            .set_json(json!({"centroids_hz": []}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["metric"], "Error");
    }
}

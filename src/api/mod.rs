pub mod error;
pub mod estimates;
pub mod findings;
pub mod forensics;
pub mod health;
pub mod legal;
pub mod openapi;
pub mod sanitize;

use actix_web::web;

/// Register every route plus the shared JSON error handler
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler));

    health::configure(cfg);
    openapi::configure(cfg);
    findings::configure(cfg);
    estimates::configure(cfg);
    forensics::configure(cfg);
    legal::configure(cfg);
    sanitize::configure(cfg);
}

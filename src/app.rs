//! Application state and service initialization
//!
//! This module centralizes all service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use actix_web::web;

use crate::model::Config;
use crate::service::{CostEstimator, InputSanitizer, KeywordCodeIndex, LegalShieldService, TapAnalyzer};

/// Application state containing all services and shared resources
///
/// Every service is immutable after construction, so handlers share them
/// through `web::Data` without locking.
#[derive(Clone)]
pub struct AppState {
    pub estimator: web::Data<CostEstimator>,
    pub tap_analyzer: web::Data<TapAnalyzer>,
    pub legal_service: web::Data<LegalShieldService>,
    pub sanitizer: web::Data<InputSanitizer>,
}

impl AppState {
    /// Build application state from configuration
    ///
    /// Fails when the cost table is unusable. An empty code index is allowed;
    /// legal lookups then report the service as unavailable.
    pub fn new(config: Config) -> Result<Self, AppError> {
        config
            .cost_table
            .validate()
            .map_err(AppError::InvalidConfig)?;

        if !config.forensics.hollowness_threshold_hz.is_finite() {
            return Err(AppError::InvalidConfig(format!(
                "hollowness threshold {} is not finite",
                config.forensics.hollowness_threshold_hz
            )));
        }

        if config.building_codes.is_empty() {
            tracing::warn!("No building code sections configured, legal citations disabled");
        }

        let sanitizer = InputSanitizer::new();
        let code_index = KeywordCodeIndex::new(config.building_codes);

        tracing::info!(
            defect_types = config.cost_table.baseline_costs.len(),
            code_sections = code_index.len(),
            hollowness_threshold_hz = config.forensics.hollowness_threshold_hz,
            "Services initialized"
        );

        Ok(Self {
            estimator: web::Data::new(CostEstimator::new(Arc::new(config.cost_table))),
            tap_analyzer: web::Data::new(TapAnalyzer::new(&config.forensics)),
            legal_service: web::Data::new(LegalShieldService::new(
                Arc::new(code_index),
                sanitizer.clone(),
            )),
            sanitizer: web::Data::new(sanitizer),
        })
    }

    /// Register shared services as application data
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.estimator.clone())
            .app_data(self.tap_analyzer.clone())
            .app_data(self.legal_service.clone())
            .app_data(self.sanitizer.clone());
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

//! SafeHaven inspection service
//!
//! Turns raw output from upstream AI services into records the inspection
//! dashboard can always render: normalized defect findings, repair cost
//! ranges, tap-test classifications and building code citations.

pub mod api;
pub mod app;
pub mod model;
pub mod service;

//! Repair cost estimation
//!
//! `base cost x severity multiplier x regional factor`, reported as a band of
//! plus/minus `band_ratio` around the computed cost.

use std::sync::Arc;

use crate::model::{CostEstimate, CostTable, SeverityBand};

/// Default regional market factor
pub const DEFAULT_REGION_FACTOR: f64 = 1.0;

/// Estimates repair cost ranges from a shared, immutable cost table
#[derive(Debug, Clone)]
pub struct CostEstimator {
    table: Arc<CostTable>,
}

impl Default for CostEstimator {
    fn default() -> Self {
        Self::new(Arc::new(CostTable::default()))
    }
}

impl CostEstimator {
    pub fn new(table: Arc<CostTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CostTable {
        &self.table
    }

    /// Estimate the repair cost range for one defect
    ///
    /// Unknown defect types use the table's fallback base cost. Severities
    /// outside 0-100 are bucketed into the nearest band rather than rejected.
    pub fn estimate(&self, defect_type: &str, severity: i64, region_factor: f64) -> CostEstimate {
        let base = self.table.base_cost(defect_type);
        let band = SeverityBand::from_score(severity);
        let multiplier = band.multiplier();

        if !(0..=100).contains(&severity) {
            tracing::debug!(
                defect_type = %defect_type,
                severity = severity,
                band = ?band,
                "Severity outside 0-100, using edge band"
            );
        }

        let estimated = base * multiplier * region_factor;
        let low = round_cents(estimated * (1.0 - self.table.band_ratio));
        let high = round_cents(estimated * (1.0 + self.table.band_ratio));

        CostEstimate {
            min_estimate_usd: low.min(high),
            max_estimate_usd: low.max(high),
            severity_multiplier: multiplier,
            severity_band: band,
            calculation_note: format!(
                "Base ${:?} x Severity {:?}x x Region {:?}x",
                base, multiplier, region_factor
            ),
        }
    }
}

/// Round to two decimal places, ties to even on the exact binary value
///
/// Precision formatting rounds the exact value of the float, so a product such
/// as `325.12499999999997` stays below the tie instead of being pushed over it
/// by a `* 100.0` multiplication.
fn round_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_water_damage_minor() {
        let est = CostEstimator::default().estimate("water_damage", 10, 1.0);
        assert_close(est.min_estimate_usd, 425.0);
        assert_close(est.max_estimate_usd, 575.0);
        assert_eq!(est.severity_multiplier, 1.0);
        assert_eq!(est.severity_band, SeverityBand::Minor);
        assert_eq!(est.calculation_note, "Base $500.0 x Severity 1.0x x Region 1.0x");
    }

    #[test]
    fn test_water_damage_critical_midpoint() {
        let est = CostEstimator::default().estimate("water_damage", 90, 1.0);
        assert_close(est.midpoint(), 2000.0);
        assert_eq!(est.severity_multiplier, 4.0);
    }

    #[test]
    fn test_unknown_type_uses_fallback_base() {
        let est = CostEstimator::default().estimate("unknown_type", 10, 1.0);
        assert_close(est.min_estimate_usd, 255.0);
        assert_close(est.max_estimate_usd, 345.0);
    }

    #[test]
    fn test_rounding_uses_exact_float_value() {
        let est = CostEstimator::default().estimate("water_damage", 30, 0.51);
        assert_eq!(est.min_estimate_usd, 325.12);
        assert_eq!(est.max_estimate_usd, 439.87);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(425.0), 425.0);
        assert_eq!(round_cents(1.005), 1.0);
        assert_eq!(round_cents(2.675), 2.67);
        assert_eq!(round_cents(-1.235), -1.24);
    }

    #[test]
    fn test_multiplier_per_band() {
        let estimator = CostEstimator::default();
        let cases = [
            (0, 1.0),
            (20, 1.0),
            (21, 1.5),
            (50, 1.5),
            (51, 2.5),
            (80, 2.5),
            (81, 4.0),
            (100, 4.0),
            (-10, 1.0),
            (1000, 4.0),
        ];
        for (severity, expected) in cases {
            let est = estimator.estimate("roof_leak", severity, 1.0);
            assert_eq!(est.severity_multiplier, expected, "severity {}", severity);
        }
    }

    #[test]
    fn test_region_factor_scales_linearly() {
        let estimator = CostEstimator::default();
        for defect in ["structural_crack", "mold_remediation", "electrical_issue", "other"] {
            let single = estimator.estimate(defect, 65, 1.2);
            let double = estimator.estimate(defect, 65, 2.4);
            assert!((double.min_estimate_usd - 2.0 * single.min_estimate_usd).abs() <= 0.011);
            assert!((double.max_estimate_usd - 2.0 * single.max_estimate_usd).abs() <= 0.011);
        }
    }

    #[test]
    fn test_bounds_ordered_and_non_negative() {
        let estimator = CostEstimator::default();
        for severity in [-50, 0, 33, 77, 99, 150] {
            for region in [0.0, 0.8, 1.0, 1.5] {
                let est = estimator.estimate("electrical_issue", severity, region);
                assert!(est.min_estimate_usd >= 0.0);
                assert!(est.min_estimate_usd <= est.max_estimate_usd);
            }
        }
    }

    #[test]
    fn test_negative_region_keeps_bounds_ordered() {
        let est = CostEstimator::default().estimate("water_damage", 10, -1.0);
        assert!(est.min_estimate_usd <= est.max_estimate_usd);
        assert_close(est.min_estimate_usd, -575.0);
    }

    #[test]
    fn test_injected_cost_table() {
        let table = CostTable {
            baseline_costs: BTreeMap::from([("gutter".to_string(), 100.0)]),
            fallback_base_cost: 50.0,
            band_ratio: 0.5,
        };
        let estimator = CostEstimator::new(Arc::new(table));

        let est = estimator.estimate("gutter", 30, 1.0);
        assert_close(est.min_estimate_usd, 75.0);
        assert_close(est.max_estimate_usd, 225.0);

        let est = estimator.estimate("water_damage", 0, 1.0);
        assert_close(est.midpoint(), 50.0);
    }
}

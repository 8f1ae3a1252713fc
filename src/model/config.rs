use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::model::CodeSection;

const ENV_CONFIG_PATH: &str = "SAFEHAVEN_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Base cost applied to defect types missing from the table
pub const DEFAULT_FALLBACK_BASE_COST: f64 = 300.0;

/// Half-width of the estimate band around the computed cost
pub const DEFAULT_BAND_RATIO: f64 = 0.15;

/// Mean centroid below which a tap is considered hollow
pub const DEFAULT_HOLLOWNESS_THRESHOLD_HZ: f64 = 1500.0;

fn default_baseline_costs() -> BTreeMap<String, f64> {
    [
        ("water_damage", 500.0),
        ("electrical_issue", 250.0),
        ("structural_crack", 1500.0),
        ("mold_remediation", 800.0),
        ("roof_leak", 1200.0),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

fn default_fallback_base_cost() -> f64 {
    DEFAULT_FALLBACK_BASE_COST
}

fn default_band_ratio() -> f64 {
    DEFAULT_BAND_RATIO
}

fn default_hollowness_threshold() -> f64 {
    DEFAULT_HOLLOWNESS_THRESHOLD_HZ
}

fn default_building_codes() -> Vec<CodeSection> {
    vec![CodeSection {
        section_title: "IBC Section 2509.2".to_string(),
        chunk_text: "Water-resistant gypsum backing board shall not be used in the following \
                     locations: over a vapor retarder in shower or bathtub compartments, where \
                     there will be direct exposure to water, or in areas subject to continuous \
                     high humidity."
            .to_string(),
    }]
}

/// Baseline repair costs used by the estimator
#[derive(Debug, Clone, Deserialize)]
pub struct CostTable {
    /// Base cost per defect type key (e.g. `water_damage`)
    #[serde(default = "default_baseline_costs")]
    pub baseline_costs: BTreeMap<String, f64>,
    #[serde(default = "default_fallback_base_cost")]
    pub fallback_base_cost: f64,
    #[serde(default = "default_band_ratio")]
    pub band_ratio: f64,
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            baseline_costs: default_baseline_costs(),
            fallback_base_cost: DEFAULT_FALLBACK_BASE_COST,
            band_ratio: DEFAULT_BAND_RATIO,
        }
    }
}

impl CostTable {
    /// Base cost for a defect type, falling back for unknown types
    pub fn base_cost(&self, defect_type: &str) -> f64 {
        self.baseline_costs
            .get(defect_type)
            .copied()
            .unwrap_or(self.fallback_base_cost)
    }

    /// Check that every cost is finite and non-negative and the band ratio is in [0, 1)
    pub fn validate(&self) -> Result<(), String> {
        for (defect_type, cost) in &self.baseline_costs {
            if !cost.is_finite() || *cost < 0.0 {
                return Err(format!("invalid base cost {} for '{}'", cost, defect_type));
            }
        }
        if !self.fallback_base_cost.is_finite() || self.fallback_base_cost < 0.0 {
            return Err(format!(
                "invalid fallback base cost {}",
                self.fallback_base_cost
            ));
        }
        if !(0.0..1.0).contains(&self.band_ratio) {
            return Err(format!("band ratio {} outside [0, 1)", self.band_ratio));
        }
        Ok(())
    }
}

/// Tap test classification settings
#[derive(Debug, Clone, Deserialize)]
pub struct ForensicsConfig {
    #[serde(default = "default_hollowness_threshold")]
    pub hollowness_threshold_hz: f64,
}

impl Default for ForensicsConfig {
    fn default() -> Self {
        Self {
            hollowness_threshold_hz: DEFAULT_HOLLOWNESS_THRESHOLD_HZ,
        }
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub cost_table: CostTable,
    #[serde(default)]
    pub forensics: ForensicsConfig,
    #[serde(default = "default_building_codes")]
    pub building_codes: Vec<CodeSection>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            cost_table: CostTable::default(),
            forensics: ForensicsConfig::default(),
            building_codes: default_building_codes(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub cost_table: CostTable,
    pub forensics: ForensicsConfig,
    pub building_codes: Vec<CodeSection>,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        let file = ConfigFile::default();
        Self {
            cost_table: file.cost_table,
            forensics: file.forensics,
            building_codes: file.building_codes,
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path = std::env::var(ENV_CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let file = Self::load_config_file(&config_path).unwrap_or_default();

        Self {
            cost_table: file.cost_table,
            forensics: file.forensics,
            building_codes: file.building_codes,
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => Self::parse_config(&contents, path),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    fn parse_config(contents: &str, path: &Path) -> Option<ConfigFile> {
        let contents = contents.trim();
        if contents.is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Some(ConfigFile::default());
        }

        let config: ConfigFile = match serde_yaml::from_str(contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                return None;
            }
        };

        if let Err(e) = config.cost_table.validate() {
            tracing::warn!(path = %path.display(), error = %e, "Invalid cost table, using defaults");
            return None;
        }

        tracing::info!(
            path = %path.display(),
            defect_types = config.cost_table.baseline_costs.len(),
            building_codes = config.building_codes.len(),
            "Loaded configuration from file"
        );
        Some(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cost_table() {
        let table = CostTable::default();
        assert_eq!(table.baseline_costs.len(), 5);
        assert_eq!(table.base_cost("water_damage"), 500.0);
        assert_eq!(table.base_cost("roof_leak"), 1200.0);
        assert_eq!(table.base_cost("termites"), 300.0);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let yaml = "forensics:\n  hollowness_threshold_hz: 1200.0\n";
        let config = Config::parse_config(yaml, Path::new("test.yaml")).unwrap();
        assert_eq!(config.forensics.hollowness_threshold_hz, 1200.0);
        assert_eq!(config.cost_table.base_cost("structural_crack"), 1500.0);
        assert_eq!(config.building_codes.len(), 1);
    }

    #[test]
    fn test_parse_overridden_cost_table() {
        let yaml = r#"
cost_table:
  baseline_costs:
    water_damage: 650.0
  fallback_base_cost: 400.0
"#;
        let config = Config::parse_config(yaml, Path::new("test.yaml")).unwrap();
        assert_eq!(config.cost_table.base_cost("water_damage"), 650.0);
        assert_eq!(config.cost_table.base_cost("roof_leak"), 400.0);
        assert_eq!(config.cost_table.band_ratio, DEFAULT_BAND_RATIO);
    }

    #[test]
    fn test_parse_rejects_negative_costs() {
        let yaml = "cost_table:\n  baseline_costs:\n    roof_leak: -10.0\n";
        assert!(Config::parse_config(yaml, Path::new("test.yaml")).is_none());
    }

    #[test]
    fn test_parse_empty_and_invalid() {
        assert!(Config::parse_config("   \n", Path::new("test.yaml")).is_some());
        assert!(Config::parse_config("cost_table: [1, 2", Path::new("test.yaml")).is_none());
    }

    #[test]
    fn test_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}

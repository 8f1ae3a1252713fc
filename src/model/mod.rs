pub mod config;
pub mod estimate;
pub mod finding;
pub mod forensics;
pub mod legal;

pub use config::{Config, CostTable, ForensicsConfig};
pub use estimate::{CostEstimate, SeverityBand};
pub use finding::DefectFinding;
pub use forensics::TapAnalysis;
pub use legal::{CodeSection, LegalContext, LegalContextStatus};

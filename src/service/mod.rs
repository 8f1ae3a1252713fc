pub mod estimator;
pub mod forensics;
pub mod legal;
pub mod normalizer;
pub mod sanitize;

pub use estimator::CostEstimator;
pub use forensics::TapAnalyzer;
pub use legal::{CodeSearch, KeywordCodeIndex, LegalShieldService};
pub use sanitize::InputSanitizer;

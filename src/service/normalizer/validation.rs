//! Schema validation for LLM-produced findings
//!
//! Checks the parsed JSON document field by field so that every problem is
//! reported at once instead of stopping at the first one.

use serde_json::{Map, Value};

use crate::model::DefectFinding;

const STRING_FIELDS: [&str; 3] = ["defect", "visual_description", "recommended_fix"];

/// Result of finding validation
#[derive(Debug)]
pub struct FindingValidationResult {
    /// Whether the document passed validation
    pub is_valid: bool,
    /// Problems that make the document unusable
    pub errors: Vec<String>,
}

impl FindingValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }
}

/// Validate a parsed JSON document against the finding schema
///
/// Checks:
/// 1. The document is a JSON object
/// 2. `defect`, `visual_description` and `recommended_fix` are present strings
/// 3. `severity` is present and reads as an integer (see [`coerce_severity`])
///
/// Unknown extra fields are ignored.
pub fn validate_finding_document(document: &Value) -> FindingValidationResult {
    let mut result = FindingValidationResult::valid();

    let Some(object) = document.as_object() else {
        result.add_error(format!(
            "expected a JSON object, found {}",
            json_type_name(document)
        ));
        return result;
    };

    for field in STRING_FIELDS {
        match object.get(field) {
            None => result.add_error(format!("missing field '{}'", field)),
            Some(Value::String(_)) => {}
            Some(other) => result.add_error(format!(
                "field '{}' must be a string, found {}",
                field,
                json_type_name(other)
            )),
        }
    }

    match object.get("severity") {
        None => result.add_error("missing field 'severity'".to_string()),
        Some(value) => {
            if let Err(e) = coerce_severity(value) {
                result.add_error(e);
            }
        }
    }

    result
}

/// Build a finding from a document that passed validation
pub(crate) fn finding_from_object(object: &Map<String, Value>) -> Option<DefectFinding> {
    Some(DefectFinding {
        defect: object.get("defect")?.as_str()?.to_string(),
        severity: coerce_severity(object.get("severity")?).ok()?,
        visual_description: object.get("visual_description")?.as_str()?.to_string(),
        recommended_fix: object.get("recommended_fix")?.as_str()?.to_string(),
    })
}

/// Read a severity value the way a lax integer field would
///
/// Accepts JSON integers, floats with no fractional part (`50.0`), base-10
/// integer strings (`"50"`, `" 50 "`) and booleans (`true` is 1). Fractional
/// numbers, other strings and values outside the `i64` range are rejected.
pub fn coerce_severity(value: &Value) -> Result<i64, String> {
    const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
    const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            if n.is_u64() {
                return Err(format!("field 'severity' is out of range, found {}", n));
            }
            match n.as_f64() {
                Some(f) if f.fract() != 0.0 => Err(format!(
                    "field 'severity' must be an integer, found {}",
                    n
                )),
                Some(f) if (I64_LOWER..I64_UPPER).contains(&f) => Ok(f as i64),
                _ => Err(format!("field 'severity' is out of range, found {}", n)),
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            match trimmed.parse::<i64>() {
                Ok(i) => Ok(i),
                Err(_) if trimmed.parse::<i128>().is_ok() => Err(format!(
                    "field 'severity' is out of range, found string '{}'",
                    s
                )),
                Err(_) => Err(format!(
                    "field 'severity' must be an integer, found string '{}'",
                    s
                )),
            }
        }
        Value::Bool(b) => Ok(i64::from(*b)),
        other => Err(format!(
            "field 'severity' must be an integer, found {}",
            json_type_name(other)
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_document() {
        let doc = json!({
            "defect": "Crack",
            "severity": 50,
            "visual_description": "Bad crack",
            "recommended_fix": "Fill it",
            "confidence": 0.9
        });
        let result = validate_finding_document(&doc);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_collects_every_problem() {
        let doc = json!({"defect": "Crack", "severity": "HIGH"});
        let result = validate_finding_document(&doc);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors.iter().any(|e| e.contains("'visual_description'")));
        assert!(result.errors.iter().any(|e| e.contains("'recommended_fix'")));
        assert!(
            result
                .errors
                .iter()
                .any(|e| e.contains("'severity' must be an integer, found string"))
        );
    }

    #[test]
    fn test_float_severity_rejected() {
        let doc = json!({
            "defect": "Crack",
            "severity": 50.5,
            "visual_description": "Bad crack",
            "recommended_fix": "Fill it"
        });
        let result = validate_finding_document(&doc);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("50.5"));
    }

    #[test]
    fn test_lax_integer_severity_accepted() {
        assert_eq!(coerce_severity(&json!(50)), Ok(50));
        assert_eq!(coerce_severity(&json!(50.0)), Ok(50));
        assert_eq!(coerce_severity(&json!(-0.0)), Ok(0));
        assert_eq!(coerce_severity(&json!("50")), Ok(50));
        assert_eq!(coerce_severity(&json!(" -7 ")), Ok(-7));
        assert_eq!(coerce_severity(&json!(true)), Ok(1));
        assert_eq!(coerce_severity(&json!(false)), Ok(0));
    }

    #[test]
    fn test_non_integer_severity_rejected() {
        for value in [json!(50.5), json!("HIGH"), json!("50.5"), json!(""), json!(null), json!([50])] {
            let err = coerce_severity(&value).unwrap_err();
            assert!(err.contains("must be an integer"), "{}", err);
        }
    }

    #[test]
    fn test_severity_outside_i64_reports_range() {
        let too_big: Value = serde_json::from_str("9223372036854775808").unwrap();
        for value in [too_big, json!(1e19), json!(-1e19), json!("9223372036854775808")] {
            let err = coerce_severity(&value).unwrap_err();
            assert!(err.contains("out of range"), "{}", err);
        }
    }

    #[test]
    fn test_coerced_severity_builds_finding() {
        let doc = json!({
            "defect": "Crack",
            "severity": "50",
            "visual_description": "Bad crack",
            "recommended_fix": "Fill it"
        });
        assert!(validate_finding_document(&doc).is_valid);
        let finding = finding_from_object(doc.as_object().unwrap()).unwrap();
        assert_eq!(finding.severity, 50);
    }

    #[test]
    fn test_null_and_numbers_rejected_for_text_fields() {
        let doc = json!({
            "defect": null,
            "severity": 10,
            "visual_description": 42,
            "recommended_fix": "Fill it"
        });
        let result = validate_finding_document(&doc);
        assert_eq!(
            result.errors,
            vec![
                "field 'defect' must be a string, found null".to_string(),
                "field 'visual_description' must be a string, found number".to_string(),
            ]
        );
    }

    #[test]
    fn test_non_object_rejected() {
        let result = validate_finding_document(&json!([1, 2, 3]));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["expected a JSON object, found array"]);
    }

    #[test]
    fn test_finding_from_object() {
        let doc = json!({
            "defect": "Mold",
            "severity": -3,
            "visual_description": "Dark spots",
            "recommended_fix": "Remediate"
        });
        let finding = finding_from_object(doc.as_object().unwrap()).unwrap();
        assert_eq!(finding.severity, -3);
        assert_eq!(finding.defect, "Mold");
    }
}

//! Prompts for defect extraction by the vision model

use crate::model::DefectFinding;

/// System prompt for defect extraction
pub const FINDING_SYSTEM_PROMPT: &str = r#"You are a licensed home inspector reviewing a photo taken during an inspection.

Your role is to identify the single most significant visible defect and describe
it for a homeowner.

You must:
- Describe only what is visible in the image
- Rate severity as an integer from 0 (cosmetic) to 100 (immediate safety risk)
- Recommend a concrete, proportionate repair

Do not:
- Speculate about hidden damage you cannot see
- Quote prices or building code sections

Your output must be a single JSON object only, with no surrounding prose, and
conform to the requested schema."#;

/// JSON schema of the finding the model must return
pub fn finding_schema() -> String {
    let schema = schemars::schema_for!(DefectFinding);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

/// Build the per-image extraction prompt
pub fn build_finding_prompt(room: Option<&str>, inspector_notes: Option<&str>) -> String {
    let mut prompt = String::new();

    match room {
        Some(room) if !room.trim().is_empty() => {
            prompt.push_str(&format!("Room: {}\n", room.trim()));
        }
        _ => prompt.push_str("Room: unspecified\n"),
    }

    if let Some(notes) = inspector_notes.filter(|n| !n.trim().is_empty()) {
        prompt.push_str(&format!("Inspector notes: {}\n", notes.trim()));
    }

    prompt.push_str(&format!(
        "\nAnalyze the attached image and respond with JSON matching this schema:\n{}\n",
        finding_schema()
    ));

    prompt
}

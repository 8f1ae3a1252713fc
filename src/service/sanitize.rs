//! Sanitization of free text supplied by users before it reaches other services

use regex::Regex;

/// Strips script blocks and other active-content tags from user input
#[derive(Debug, Clone)]
pub struct InputSanitizer {
    script_pattern: Regex,
    dangerous_tag_pattern: Regex,
}

impl Default for InputSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSanitizer {
    pub fn new() -> Self {
        Self {
            script_pattern: Regex::new(r"(?is)<script.*?>.*?</script>").unwrap(),
            dangerous_tag_pattern: Regex::new(
                r"(?i)</?(?:iframe|object|embed|applet|style|meta|link).*?>",
            )
            .unwrap(),
        }
    }

    /// Remove `<script>` blocks and dangerous tags, then trim surrounding whitespace
    ///
    /// Only the tags themselves are removed for non-script elements; their
    /// inner text is kept.
    pub fn sanitize(&self, input: &str) -> String {
        let without_scripts = self.script_pattern.replace_all(input, "");
        let cleaned = self
            .dangerous_tag_pattern
            .replace_all(&without_scripts, "");

        if cleaned.len() != input.len() {
            tracing::debug!(
                removed_bytes = input.len() - cleaned.len(),
                "Removed markup from user input"
            );
        }

        cleaned.trim().to_string()
    }
}

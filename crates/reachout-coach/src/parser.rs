//! Parse LLM output into a keyword list

use crate::error::CoachError;
use serde_json::Value;
use tracing::warn;

/// Parse an LLM response into at most `max_keywords` keyword strings.
///
/// Models sometimes wrap the array in markdown code fences or surround it
/// with prose; both are tolerated. Non-string array entries are skipped
/// with a warning rather than failing the whole extraction.
pub(crate) fn parse_keywords(response: &str, max_keywords: usize) -> Result<Vec<String>, CoachError> {
    let json_str = strip_fences(response);

    let json: Value = match serde_json::from_str(&json_str) {
        Ok(json) => json,
        // Fall back to the first bracketed span when the model added prose
        Err(_) => match extract_array_span(&json_str) {
            Some(span) => serde_json::from_str(span)
                .map_err(|e| CoachError::InvalidFormat(format!("JSON parse error: {}", e)))?,
            None => {
                return Err(CoachError::InvalidFormat(
                    "response contains no JSON array".to_string(),
                ))
            }
        },
    };

    let entries = json
        .as_array()
        .ok_or_else(|| CoachError::InvalidFormat("expected a JSON array".to_string()))?;

    let mut keywords = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        match entry.as_str() {
            Some(s) => keywords.push(s.to_string()),
            None => warn!(idx, "skipping non-string keyword entry"),
        }
    }

    keywords.truncate(max_keywords);
    Ok(keywords)
}

/// Strip markdown code fences, handling both ```json and bare ``` blocks.
fn strip_fences(response: &str) -> String {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return String::new();
        }
        // Skip the first line (```json or ```) and a trailing ``` line
        let end = if lines[lines.len() - 1].trim_start().starts_with("```") {
            lines.len() - 1
        } else {
            lines.len()
        };
        lines[1..end].join("\n")
    } else {
        trimmed.to_string()
    }
}

/// First `[ ... ]` span in the text, if any.
fn extract_array_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_array() {
        let keywords = parse_keywords(r#"["product manager", "acme", "fintech"]"#, 10).unwrap();
        assert_eq!(keywords, vec!["product manager", "acme", "fintech"]);
    }

    #[test]
    fn test_parse_fenced_array() {
        let response = "```json\n[\"product manager\", \"acme\"]\n```";
        let keywords = parse_keywords(response, 10).unwrap();
        assert_eq!(keywords, vec!["product manager", "acme"]);
    }

    #[test]
    fn test_parse_fenced_without_language() {
        let response = "```\n[\"engineer\"]\n```";
        let keywords = parse_keywords(response, 10).unwrap();
        assert_eq!(keywords, vec!["engineer"]);
    }

    #[test]
    fn test_parse_array_embedded_in_prose() {
        let response = "Sure! Here are the keywords: [\"vc\", \"startup\"] and good luck!";
        let keywords = parse_keywords(response, 10).unwrap();
        assert_eq!(keywords, vec!["vc", "startup"]);
    }

    #[test]
    fn test_caps_at_max_keywords() {
        let entries: Vec<String> = (0..15).map(|i| format!("\"kw{i}\"")).collect();
        let response = format!("[{}]", entries.join(","));
        let keywords = parse_keywords(&response, 10).unwrap();
        assert_eq!(keywords.len(), 10);
        assert_eq!(keywords[0], "kw0");
        assert_eq!(keywords[9], "kw9");
    }

    #[test]
    fn test_non_string_entries_skipped() {
        let keywords = parse_keywords(r#"["engineer", 42, null, "founder"]"#, 10).unwrap();
        assert_eq!(keywords, vec!["engineer", "founder"]);
    }

    #[test]
    fn test_empty_array_is_ok() {
        let keywords = parse_keywords("[]", 10).unwrap();
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_not_json_at_all() {
        let result = parse_keywords("I cannot help with that.", 10);
        assert!(matches!(result, Err(CoachError::InvalidFormat(_))));
    }

    #[test]
    fn test_json_but_not_array() {
        let result = parse_keywords(r#"{"keywords": "oops"}"#, 10);
        assert!(matches!(result, Err(CoachError::InvalidFormat(_))));
    }

    #[test]
    fn test_empty_code_block() {
        let result = parse_keywords("```", 10);
        assert!(result.is_err());
    }
}

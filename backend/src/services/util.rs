//! Small helpers shared across service modules.

/// Normalizes a student identifier the same way the frontend does before a
/// roster lookup: trimmed, upper-cased.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Minimal email shape check.
pub fn looks_like_email(value: &str) -> bool {
    value.contains('@') && value.contains('.')
}

/// Serializes a string list for storage in a TEXT column.
pub fn encode_list(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

/// Parses a stored string list; malformed rows decode as empty.
pub fn decode_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_normalization() {
        assert_eq!(normalize_identifier("  21cs044 "), "21CS044");
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("club@example.edu"));
        assert!(!looks_like_email("not-an-email"));
    }

    #[test]
    fn list_round_trip() {
        let values = vec!["Python".to_string(), "robotics".to_string()];
        assert_eq!(decode_list(&encode_list(&values)), values);
        assert!(decode_list("not json").is_empty());
    }
}

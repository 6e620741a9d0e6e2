//! Response body presentation rules

use serde_json::Value as JsonValue;

/// Marker appended to a truncated body
pub const TRUNCATION_MARKER: &str = "...";

/// Printed instead of an empty body
pub const NO_CONTENT: &str = "no-content";

/// Display settings that apply to a response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodySettings {
    pub uncut: bool,
    /// Maximum number of characters shown unless `uncut` is set
    pub limit: usize,
    pub json: bool,
}

/// How a body ends up on screen
#[derive(Debug, Clone, PartialEq)]
pub enum BodyView {
    /// Zero-length body
    Empty,
    /// Text between delimiters, possibly cut at the limit
    Text { text: String, truncated: bool },
    /// Parsed body, printed as indented JSON
    Json(JsonValue),
}

impl BodyView {
    /// Decide how to show `body`.
    ///
    /// A truncated body is always shown as text, even when JSON output was
    /// asked for. JSON parse failures are returned to the caller.
    pub fn from_body(body: &str, settings: &BodySettings) -> Result<Self, serde_json::Error> {
        if body.is_empty() {
            return Ok(BodyView::Empty);
        }

        if !settings.uncut {
            if let Some(prefix) = truncate_chars(body, settings.limit) {
                return Ok(BodyView::Text {
                    text: prefix.to_string(),
                    truncated: true,
                });
            }
        }

        if settings.json {
            return serde_json::from_str(body).map(BodyView::Json);
        }

        Ok(BodyView::Text {
            text: body.to_string(),
            truncated: false,
        })
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, BodyView::Text { truncated: true, .. })
    }
}

/// First `limit` characters of `text`, or `None` when it already fits
pub fn truncate_chars(text: &str, limit: usize) -> Option<&str> {
    text.char_indices().nth(limit).map(|(cut, _)| &text[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings(limit: usize) -> BodySettings {
        BodySettings { uncut: false, limit, json: false }
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("ok", 1), Some("o"));
        assert_eq!(truncate_chars("ok", 2), None);
        assert_eq!(truncate_chars("ok", 3), None);
        assert_eq!(truncate_chars("ok", 0), Some(""));
        assert_eq!(truncate_chars("", 0), None);
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo", 2), Some("hé"));
        assert_eq!(truncate_chars("日本語", 3), None);
    }

    #[test]
    fn test_body_within_limit_is_unmodified() {
        let view = BodyView::from_body("ok", &settings(2)).unwrap();
        assert_eq!(view, BodyView::Text { text: "ok".to_string(), truncated: false });
    }

    #[test]
    fn test_body_over_limit_is_truncated() {
        let view = BodyView::from_body("ok", &settings(1)).unwrap();
        assert_eq!(view, BodyView::Text { text: "o".to_string(), truncated: true });
        assert!(view.is_truncated());
    }

    #[test]
    fn test_uncut_ignores_limit() {
        let view = BodyView::from_body("abcdef", &BodySettings { uncut: true, limit: 2, json: false }).unwrap();
        assert_eq!(view, BodyView::Text { text: "abcdef".to_string(), truncated: false });
    }

    #[test]
    fn test_empty_body_is_always_empty() {
        for uncut in [false, true] {
            for json in [false, true] {
                let view = BodyView::from_body("", &BodySettings { uncut, limit: 0, json }).unwrap();
                assert_eq!(view, BodyView::Empty);
            }
        }
    }

    #[test]
    fn test_json_body_is_parsed() {
        let view = BodyView::from_body(r#"{"a":1}"#, &BodySettings { uncut: false, limit: 100, json: true }).unwrap();
        assert_eq!(view, BodyView::Json(json!({"a": 1})));
    }

    #[test]
    fn test_truncation_forces_text_over_json() {
        let view = BodyView::from_body(r#"{"a":1}"#, &BodySettings { uncut: false, limit: 3, json: true }).unwrap();
        assert_eq!(view, BodyView::Text { text: r#"{"a"#.to_string(), truncated: true });
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = BodyView::from_body("not json", &BodySettings { uncut: false, limit: 100, json: true });
        assert!(result.is_err());
    }
}

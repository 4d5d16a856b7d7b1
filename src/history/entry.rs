use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::templates::TemplateKey;

/// One recorded generation
///
/// Field names match the on-disk format; `model` is omitted when the request
/// did not name one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub user_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default)]
    pub prompt_style: String,
    #[serde(default)]
    pub model_response: String,
    #[serde(default)]
    pub timestamp: String,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time
    pub fn new(
        user_prompt: impl Into<String>,
        model: Option<String>,
        prompt_style: TemplateKey,
        model_response: impl Into<String>,
    ) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            model,
            prompt_style: prompt_style.as_str().to_string(),
            model_response: model_response.into(),
            timestamp: now_timestamp(),
        }
    }
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_timestamp_format() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), "2024-01-01T00:00:00.000Z".len());
        assert!(ts.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_serialized_field_names() {
        let entry = HistoryEntry {
            user_prompt: "a red fox in snow".into(),
            model: Some("phi4-mini".into()),
            prompt_style: "realistic".into(),
            model_response: "A red fox stands in snow...".into(),
            timestamp: "2024-01-01T00:00:00.000Z".into(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["user_prompt"], "a red fox in snow");
        assert_eq!(json["model"], "phi4-mini");
        assert_eq!(json["prompt_style"], "realistic");
        assert_eq!(json["model_response"], "A red fox stands in snow...");
        assert_eq!(json["timestamp"], "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_absent_model_is_omitted() {
        let entry = HistoryEntry::new("dunes", None, TemplateKey::Drawing, "Ink dunes");
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("model").is_none());
        assert_eq!(json["prompt_style"], "drawing");

        let back: HistoryEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}

//! Wire types for preset responses.

use serde::{Deserialize, Serialize};

/// A hosted pretrained model, addressed by its opaque key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub key: String,
    pub slug: String,
    pub name: String,
}

/// A label a classifier preset can assign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetLabel {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One prediction outcome.
///
/// Standard predictions populate `probability`; aspect-based predictions
/// populate `sentiment`. The server never sets both on the same result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_deserialize_ignores_extra_fields() {
        let json = r#"{
            "key": "a1b2c3d4",
            "slug": "hotel-reviews",
            "name": "Hotel Reviews",
            "language": "en",
            "labelCount": 4
        }"#;
        let preset: Preset = serde_json::from_str(json).unwrap();
        assert_eq!(preset.key, "a1b2c3d4");
        assert_eq!(preset.slug, "hotel-reviews");
    }

    #[test]
    fn test_label_description_may_be_absent() {
        let label: PresetLabel = serde_json::from_str(r#"{"name": "Positive"}"#).unwrap();
        assert_eq!(label.name, "Positive");
        assert!(label.description.is_none());
    }

    #[test]
    fn test_prediction_result_standard_mode() {
        let json = r#"{"name": "Positive", "probability": 0.93}"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.probability, Some(0.93));
        assert!(result.sentiment.is_none());
    }

    #[test]
    fn test_prediction_result_aspect_mode() {
        let json = r#"{"name": "battery", "sentiment": "positive"}"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert!(result.probability.is_none());
        assert_eq!(result.sentiment.as_deref(), Some("positive"));
    }

    #[test]
    fn test_prediction_result_encode_omits_null_fields() {
        let result = PredictionResult {
            name: "Positive".into(),
            probability: Some(0.5),
            sentiment: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("sentiment"));
    }
}

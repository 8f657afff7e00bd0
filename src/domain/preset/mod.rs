//! Preset domain — the catalog of hosted models and their predictions.

pub mod client;
pub mod wire;

pub use wire::{PredictionResult, Preset, PresetLabel};

use serde::{Deserialize, Serialize};

// ─── PresetType ──────────────────────────────────────────────────────────────

/// Preset model type, used as a catalog filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresetType {
    Extractor,
    Classifier,
}

impl PresetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetType::Extractor => "Extractor",
            PresetType::Classifier => "Classifier",
        }
    }
}

impl std::fmt::Display for PresetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── PresetCategory ──────────────────────────────────────────────────────────

/// Preset catalog category, used as a catalog filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresetCategory {
    #[serde(rename = "Sentiment Classifier")]
    SentimentClassifier,
    #[serde(rename = "Content Classifier")]
    ContentClassifier,
}

impl PresetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetCategory::SentimentClassifier => "Sentiment Classifier",
            PresetCategory::ContentClassifier => "Content Classifier",
        }
    }
}

impl std::fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

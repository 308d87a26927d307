//! Stability Types

use serde::{Deserialize, Serialize};

use crate::constants::{AT_RISK_CLASS, LABEL_AT_RISK, LABEL_SAFE};
use crate::logic::explain::TokenImportance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prediction {
    #[serde(rename = "Safe")]
    Safe,
    #[serde(rename = "At Risk")]
    AtRisk,
}

impl Prediction {
    pub fn from_class(class_index: usize) -> Self {
        if class_index == AT_RISK_CLASS {
            Prediction::AtRisk
        } else {
            Prediction::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Prediction::Safe => LABEL_SAFE,
            Prediction::AtRisk => LABEL_AT_RISK,
        }
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prediction output for one article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// `title + " " + description`
    pub text: String,
    pub prediction: Prediction,
    /// Probability of the predicted class, 0.0 - 1.0
    pub confidence: f32,
    pub url: String,
    pub explanation: Vec<TokenImportance>,
}

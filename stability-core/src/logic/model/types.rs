//! Model Types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;

// ============================================================================
// CONFIG
// ============================================================================

/// Where and how to load the classifier
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub model_dir: PathBuf,
    pub max_sequence_length: usize,
    pub mask_token: String,
    pub pad_token: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from(constants::DEFAULT_MODEL_DIR),
            max_sequence_length: constants::MAX_SEQUENCE_LENGTH,
            mask_token: constants::MASK_TOKEN.to_string(),
            pad_token: constants::PAD_TOKEN.to_string(),
        }
    }
}

impl ModelConfig {
    pub fn model_path(&self) -> PathBuf {
        self.model_dir.join(constants::MODEL_FILE_NAME)
    }

    pub fn tokenizer_path(&self) -> PathBuf {
        self.model_dir.join(constants::TOKENIZER_FILE_NAME)
    }
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One encoded text: special tokens included, not padded
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizedText {
    pub ids: Vec<i64>,
    pub attention_mask: Vec<i64>,
    pub type_ids: Vec<i64>,
    /// Decoded tokens, `[CLS]` and `[SEP]` included
    pub tokens: Vec<String>,
}

impl TokenizedText {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Copy with the id at `position` replaced by `mask_id`.
    /// Attention mask and type ids are left untouched.
    pub fn masked_at(&self, position: usize, mask_id: i64) -> Self {
        let mut masked = self.clone();
        if let Some(id) = masked.ids.get_mut(position) {
            *id = mask_id;
        }
        masked
    }
}

/// Engine Status for health checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub model_loaded: bool,
    pub model_name: String,
    pub inference_device: String,
    pub avg_latency_ms: f32,
    pub inference_count: u64,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Failed to load model: {0}")]
    Load(String),

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    #[error("Inference failed: {0}")]
    Runtime(String),

    #[error("Model returned no logits")]
    EmptyOutput,
}

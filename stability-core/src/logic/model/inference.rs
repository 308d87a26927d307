//! Inference Engine - Classifier capability
//!
//! Trait `Classifier` là ranh giới giữa pipeline và runtime (ONNX, fake, ...).
//! Probability helpers dùng chung cho Predictor và Explainer.

use super::types::{EngineStatus, InferenceError, TokenizedText};

// ============================================================================
// INFERENCE ENGINE TRAIT
// ============================================================================

/// Sequence classifier loaded once and shared read-only across requests.
pub trait Classifier: Send + Sync {
    /// Encode a single text (special tokens added, truncated, not padded).
    fn tokenize(&self, text: &str) -> Result<TokenizedText, InferenceError>;

    /// Id substituted for a token when measuring its contribution.
    fn mask_token_id(&self) -> i64;

    /// Raw logits, one row per input. Rows may differ in length.
    fn logits(&self, batch: &[TokenizedText]) -> Result<Vec<Vec<f32>>, InferenceError>;

    fn status(&self) -> EngineStatus;
}

// ============================================================================
// PREDICTION
// ============================================================================

/// Batch path: class probabilities for every text.
pub fn predict_proba(
    classifier: &dyn Classifier,
    texts: &[&str],
) -> Result<Vec<Vec<f32>>, InferenceError> {
    if texts.is_empty() {
        return Ok(Vec::new());
    }

    let batch = texts
        .iter()
        .map(|text| classifier.tokenize(text))
        .collect::<Result<Vec<_>, _>>()?;

    let logits = classifier.logits(&batch)?;
    if logits.len() != batch.len() {
        return Err(InferenceError::Runtime(format!(
            "expected {} logit rows, got {}",
            batch.len(),
            logits.len()
        )));
    }

    Ok(logits.iter().map(|row| softmax(row)).collect())
}

/// Single-text convenience path.
pub fn predict_text(classifier: &dyn Classifier, text: &str) -> Result<Vec<f32>, InferenceError> {
    predict_proba(classifier, &[text])?
        .into_iter()
        .next()
        .ok_or(InferenceError::EmptyOutput)
}

// ============================================================================
// HELPERS
// ============================================================================

/// Numerically stable softmax
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    if logits.is_empty() {
        return Vec::new();
    }

    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();

    exps.into_iter().map(|e| e / sum).collect()
}

/// Index of the largest value; the first one wins on ties.
pub fn argmax(values: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

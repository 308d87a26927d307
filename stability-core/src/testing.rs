//! Deterministic in-memory classifier for tests.
//!
//! Whitespace tokenizer with `[CLS]`/`[SEP]` boundaries. Class 1 ("At Risk")
//! logit grows with each unmasked risk word, class 0 is constant.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::logic::model::{Classifier, EngineStatus, InferenceError, TokenizedText};

pub const CLS_ID: i64 = 101;
pub const SEP_ID: i64 = 102;
pub const MASK_ID: i64 = 103;

const RISK_BASE_ID: i64 = 1000;
const POISON_ID: i64 = 999;
const OTHER_BASE_ID: i64 = 2000;

pub const DEFAULT_RISK_WORDS: &[&str] = &["war", "coup", "crisis", "sanctions", "riots", "attack"];

pub struct FakeClassifier {
    risk_words: Vec<String>,
    poison_word: Option<String>,
    max_sequence_length: usize,
    forward_calls: AtomicU64,
}

impl FakeClassifier {
    pub fn new() -> Self {
        Self {
            risk_words: DEFAULT_RISK_WORDS.iter().map(|w| w.to_string()).collect(),
            poison_word: None,
            max_sequence_length: 512,
            forward_calls: AtomicU64::new(0),
        }
    }

    /// Masked forward passes fail for any text containing `word`.
    /// Unmasked passes still succeed, so prediction works and explanation fails.
    pub fn with_poison_word(mut self, word: &str) -> Self {
        self.poison_word = Some(word.to_lowercase());
        self
    }

    pub fn with_max_sequence_length(mut self, len: usize) -> Self {
        self.max_sequence_length = len.max(2);
        self
    }

    pub fn forward_calls(&self) -> u64 {
        self.forward_calls.load(Ordering::Relaxed)
    }

    fn word_id(&self, word: &str) -> i64 {
        if self.poison_word.as_deref() == Some(word) {
            return POISON_ID;
        }
        match self.risk_words.iter().position(|w| w == word) {
            Some(i) => RISK_BASE_ID + i as i64,
            None => OTHER_BASE_ID + word.bytes().map(i64::from).sum::<i64>() % 500,
        }
    }

    fn is_risk_id(&self, id: i64) -> bool {
        (RISK_BASE_ID..RISK_BASE_ID + self.risk_words.len() as i64).contains(&id)
    }
}

impl Default for FakeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for FakeClassifier {
    fn tokenize(&self, text: &str) -> Result<TokenizedText, InferenceError> {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
            .filter(|w| !w.is_empty())
            .take(self.max_sequence_length - 2)
            .collect();

        let mut tokens = Vec::with_capacity(words.len() + 2);
        let mut ids = Vec::with_capacity(words.len() + 2);

        tokens.push("[CLS]".to_string());
        ids.push(CLS_ID);
        for word in words {
            ids.push(self.word_id(&word));
            tokens.push(word);
        }
        tokens.push("[SEP]".to_string());
        ids.push(SEP_ID);

        Ok(TokenizedText {
            attention_mask: vec![1; ids.len()],
            type_ids: vec![0; ids.len()],
            ids,
            tokens,
        })
    }

    fn mask_token_id(&self) -> i64 {
        MASK_ID
    }

    fn logits(&self, batch: &[TokenizedText]) -> Result<Vec<Vec<f32>>, InferenceError> {
        self.forward_calls.fetch_add(1, Ordering::Relaxed);

        batch
            .iter()
            .map(|row| {
                if row.ids.contains(&POISON_ID) && row.ids.contains(&MASK_ID) {
                    return Err(InferenceError::Runtime("poisoned input".to_string()));
                }

                let risk = row
                    .ids
                    .iter()
                    .zip(&row.attention_mask)
                    .filter(|(id, m)| **m == 1 && self.is_risk_id(**id))
                    .count() as f32;

                Ok(vec![1.0, 2.0 * risk - 0.5])
            })
            .collect()
    }

    fn status(&self) -> EngineStatus {
        EngineStatus {
            model_loaded: true,
            model_name: "fake".to_string(),
            inference_device: "in-memory".to_string(),
            avg_latency_ms: 0.0,
            inference_count: self.forward_calls(),
        }
    }
}

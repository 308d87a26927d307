//! ONNX Classifier - ONNX Runtime Integration
//!
//! Load `model.onnx` + `tokenizer.json` (BERT sequence classifier export)
//! và chạy forward pass.

use std::borrow::Cow;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokenizers::{Tokenizer, TruncationParams};

use super::inference::Classifier;
use super::types::{EngineStatus, InferenceError, ModelConfig, TokenizedText};

const TOKEN_TYPE_IDS_INPUT: &str = "token_type_ids";

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub max_sequence_length: usize,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// BERT-style classifier backed by an ONNX Runtime session
pub struct OnnxClassifier {
    // `Session::run` needs exclusive access
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    mask_token_id: i64,
    pad_token_id: i64,
    feeds_token_type_ids: bool,
    output_name: String,
    metadata: ModelMetadata,
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
}

impl OnnxClassifier {
    /// Load tokenizer and ONNX model from `config.model_dir`
    pub fn load(config: &ModelConfig) -> Result<Self, InferenceError> {
        let model_path = config.model_path();
        let tokenizer_path = config.tokenizer_path();

        log::info!("Loading model from: {}", config.model_dir.display());

        ensure_exists(&model_path)?;
        ensure_exists(&tokenizer_path)?;

        let tokenizer = load_tokenizer(&tokenizer_path, config.max_sequence_length)?;

        let mask_token_id = tokenizer
            .token_to_id(&config.mask_token)
            .ok_or_else(|| {
                InferenceError::Tokenizer(format!("Mask token {} not in vocabulary", config.mask_token))
            })? as i64;

        let pad_token_id = tokenizer.token_to_id(&config.pad_token).unwrap_or(0) as i64;

        let session = Session::builder()
            .map_err(|e| InferenceError::Load(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::Load(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(&model_path)
            .map_err(|e| InferenceError::Load(format!("Failed to load model: {}", e)))?;

        let feeds_token_type_ids = session
            .inputs
            .iter()
            .any(|input| input.name == TOKEN_TYPE_IDS_INPUT);

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError::Load("No output defined".to_string()))?;

        log::info!(
            "ONNX model loaded successfully (output: {}, token_type_ids: {})",
            output_name,
            feeds_token_type_ids
        );

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            mask_token_id,
            pad_token_id,
            feeds_token_type_ids,
            output_name,
            metadata: ModelMetadata {
                model_path: model_path.display().to_string(),
                max_sequence_length: config.max_sequence_length,
                loaded_at: chrono::Utc::now(),
            },
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        })
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

impl Classifier for OnnxClassifier {
    fn tokenize(&self, text: &str) -> Result<TokenizedText, InferenceError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| InferenceError::Tokenizer(e.to_string()))?;

        Ok(TokenizedText {
            ids: encoding.get_ids().iter().map(|&id| id as i64).collect(),
            attention_mask: encoding.get_attention_mask().iter().map(|&m| m as i64).collect(),
            type_ids: encoding.get_type_ids().iter().map(|&t| t as i64).collect(),
            tokens: encoding.get_tokens().to_vec(),
        })
    }

    fn mask_token_id(&self) -> i64 {
        self.mask_token_id
    }

    fn logits(&self, batch: &[TokenizedText]) -> Result<Vec<Vec<f32>>, InferenceError> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let start_time = std::time::Instant::now();
        let (ids, mask, types) = pad_batch(batch, self.pad_token_id)?;

        let ids_tensor = Tensor::from_array(ids)
            .map_err(|e| InferenceError::Runtime(format!("Tensor error: {}", e)))?;
        let mask_tensor = Tensor::from_array(mask)
            .map_err(|e| InferenceError::Runtime(format!("Tensor error: {}", e)))?;

        let mut inputs = ort::inputs![
            "input_ids" => ids_tensor,
            "attention_mask" => mask_tensor
        ];
        if self.feeds_token_type_ids {
            let types_tensor = Tensor::from_array(types)
                .map_err(|e| InferenceError::Runtime(format!("Tensor error: {}", e)))?;
            inputs.push((Cow::Borrowed(TOKEN_TYPE_IDS_INPUT), types_tensor.into()));
        }

        let logits = {
            let mut session = self.session.lock();
            let outputs = session
                .run(inputs)
                .map_err(|e| InferenceError::Runtime(e.to_string()))?;

            let output = outputs
                .get(&self.output_name)
                .ok_or(InferenceError::EmptyOutput)?;

            let (_, data) = output
                .try_extract_tensor::<f32>()
                .map_err(|e| InferenceError::Runtime(format!("Extract error: {}", e)))?;

            if data.is_empty() || data.len() % batch.len() != 0 {
                return Err(InferenceError::EmptyOutput);
            }

            let num_labels = data.len() / batch.len();
            data.chunks(num_labels).map(<[f32]>::to_vec).collect::<Vec<_>>()
        };

        self.latency_sum_us
            .fetch_add(start_time.elapsed().as_micros() as u64, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);

        Ok(logits)
    }

    fn status(&self) -> EngineStatus {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        let avg = if count > 0 { (sum as f32 / count as f32) / 1000.0 } else { 0.0 };

        EngineStatus {
            model_loaded: true,
            model_name: self.metadata.model_path.clone(),
            inference_device: "ONNX Runtime (CPU)".to_string(),
            avg_latency_ms: avg,
            inference_count: count,
        }
    }
}

type PaddedBatch = (Array2<i64>, Array2<i64>, Array2<i64>);

/// Pad every row to the longest one; padded positions get `pad_id` and attention 0
fn pad_batch(batch: &[TokenizedText], pad_id: i64) -> Result<PaddedBatch, InferenceError> {
    let rows = batch.len();
    let width = batch.iter().map(TokenizedText::len).max().unwrap_or(0);
    if width == 0 {
        return Err(InferenceError::Runtime("Empty input sequence".to_string()));
    }

    let mut ids = Array2::<i64>::from_elem((rows, width), pad_id);
    let mut mask = Array2::<i64>::zeros((rows, width));
    let mut types = Array2::<i64>::zeros((rows, width));

    for (r, row) in batch.iter().enumerate() {
        for c in 0..row.len() {
            ids[[r, c]] = row.ids[c];
            mask[[r, c]] = row.attention_mask.get(c).copied().unwrap_or(1);
            types[[r, c]] = row.type_ids.get(c).copied().unwrap_or(0);
        }
    }

    Ok((ids, mask, types))
}

fn ensure_exists(path: &Path) -> Result<(), InferenceError> {
    if path.exists() {
        Ok(())
    } else {
        Err(InferenceError::ModelNotFound(path.display().to_string()))
    }
}

fn load_tokenizer(path: &Path, max_sequence_length: usize) -> Result<Tokenizer, InferenceError> {
    let mut tokenizer = Tokenizer::from_file(path)
        .map_err(|e| InferenceError::Tokenizer(e.to_string()))?;

    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length: max_sequence_length,
            ..Default::default()
        }))
        .map_err(|e| InferenceError::Tokenizer(e.to_string()))?;
    // Batches are padded by `pad_batch`
    tokenizer.with_padding(None);

    Ok(tokenizer)
}

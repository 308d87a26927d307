//! Model Module - AI/ML Inference Engine
//!
//! Tách logic inference khỏi HTTP layer.
//! Dễ dàng swap model: mọi thứ đi qua trait `Classifier`.

pub mod types;
pub mod inference;
pub mod onnx;

// Re-export common types
pub use types::{EngineStatus, InferenceError, ModelConfig, TokenizedText};
pub use inference::{argmax, predict_proba, predict_text, softmax, Classifier};
pub use onnx::OnnxClassifier;

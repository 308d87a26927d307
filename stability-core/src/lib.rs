//! Stability Core - Inference Library
//!
//! Phân loại tin tức địa chính trị: "Safe" hoặc "At Risk".
//!
//! ## Architecture
//! - `logic/model/` - Model runtime (ONNX session + tokenizer)
//! - `logic/news/` - News provider client (top headlines)
//! - `logic/stability/` - Predictor + pipeline
//! - `logic/explain/` - Leave-one-out token attribution

pub mod constants;
pub mod logic;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use logic::explain::TokenImportance;
pub use logic::model::{Classifier, EngineStatus, InferenceError, ModelConfig, OnnxClassifier};
pub use logic::news::{Article, NewsClient, NewsConfig, NewsError};
pub use logic::stability::{assess, Prediction, PredictionResult};

//! Stability Module - Headline classification
//!
//! - `predictor` - Article -> PredictionResult (không có explanation)
//! - `pipeline` - Predictor + Explainer cho một batch

pub mod types;
pub mod predictor;
pub mod pipeline;

pub use types::{Prediction, PredictionResult};
pub use predictor::{build_text, predict};
pub use pipeline::assess;

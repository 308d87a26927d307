//! Logic Module - Business Logic & Engines
//!
//! Chứa các engines xử lý: Model runtime, News fetcher, Predictor, Explainer.

pub mod model;
pub mod news;
pub mod stability;
pub mod explain;

//! Explain Module - Token attribution cho prediction

pub mod types;
pub mod engine;

pub use types::TokenImportance;
pub use engine::{explain, try_explain};

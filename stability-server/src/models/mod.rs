//! Data models

pub mod news;

pub use news::*;

//! News Module - Top headlines from the news provider

pub mod types;
pub mod client;

pub use types::{Article, NewsError};
pub use client::{NewsClient, NewsConfig};

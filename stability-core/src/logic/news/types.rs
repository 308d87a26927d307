//! News Types

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ARTICLE
// ============================================================================

/// Normalized headline, read-only after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub url: String,
}

// ============================================================================
// PROVIDER RESPONSE TYPES
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct TopHeadlinesResponse {
    #[serde(default, rename = "totalArticles")]
    pub total_articles: u64,
    #[serde(default)]
    pub articles: Vec<ProviderArticle>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProviderArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ProviderArticle {
    /// `None` when title or url is missing
    pub fn into_article(self) -> Option<Article> {
        Some(Article {
            title: self.title?,
            url: self.url?,
            description: self.description.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
        })
    }
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("News API key not configured")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Provider returned HTTP {status}")]
    Status { status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for NewsError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs carry the API token
        NewsError::Network(err.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields_default_empty() {
        let raw: ProviderArticle = serde_json::from_str(
            r#"{"title": "Summit opens", "description": null, "url": "https://example.com/a"}"#,
        )
        .unwrap();

        let article = raw.into_article().unwrap();
        assert_eq!(article.description, "");
        assert_eq!(article.content, "");
    }

    #[test]
    fn test_missing_title_or_url_is_dropped() {
        let no_url: ProviderArticle = serde_json::from_str(r#"{"title": "x"}"#).unwrap();
        let no_title: ProviderArticle = serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();

        assert!(no_url.into_article().is_none());
        assert!(no_title.into_article().is_none());
    }
}

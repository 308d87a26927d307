//! Request payloads

use serde::Deserialize;
use stability_core::Article;

/// Caller-supplied headline
#[derive(Debug, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    pub url: String,
}

impl From<NewsItem> for Article {
    fn from(item: NewsItem) -> Self {
        Article {
            title: item.title,
            description: item.description.unwrap_or_default(),
            content: item.content.unwrap_or_default(),
            url: item.url,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct PredictRequest {
    #[serde(default)]
    pub news: Option<Vec<NewsItem>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct LiveQuery {
    pub country: Option<String>,
}

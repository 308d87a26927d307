//! News API Client
//!
//! HTTP client cho endpoint top-headlines (GNews v4 mặc định).
//! `fetch` không bao giờ trả lỗi: mọi failure được log và trả về danh sách rỗng.

use std::time::Duration;

use super::types::{Article, NewsError, TopHeadlinesResponse};
use crate::constants;

/// News provider configuration
#[derive(Debug, Clone)]
pub struct NewsConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_NEWS_API_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(constants::DEFAULT_NEWS_TIMEOUT_SECS),
        }
    }
}

/// News API client
pub struct NewsClient {
    config: NewsConfig,
    http_client: reqwest::Client,
}

impl NewsClient {
    pub fn new(config: NewsConfig) -> Result<Self, NewsError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("stability-core/{}", constants::APP_VERSION))
            .build()?;

        Ok(Self { config, http_client })
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Latest headlines for `country_code`; empty on any failure.
    pub async fn fetch(&self, country_code: &str, max_articles: u32) -> Vec<Article> {
        match self.top_headlines(country_code, max_articles).await {
            Ok(articles) => articles,
            Err(e) => {
                log::error!("Error fetching news for '{}': {}", country_code, e);
                Vec::new()
            }
        }
    }

    /// Typed variant of [`fetch`](Self::fetch)
    pub async fn top_headlines(
        &self,
        country_code: &str,
        max_articles: u32,
    ) -> Result<Vec<Article>, NewsError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(NewsError::MissingApiKey),
        };

        let url = format!("{}/top-headlines", self.config.base_url.trim_end_matches('/'));
        let max = max_articles.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[("country", country_code), ("max", max.as_str()), ("token", api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::Status { status: status.as_u16() });
        }

        let body = response.bytes().await?;
        let parsed: TopHeadlinesResponse =
            serde_json::from_slice(&body).map_err(|e| NewsError::Parse(e.to_string()))?;

        log::debug!(
            "Provider returned {} of {} articles for '{}'",
            parsed.articles.len(),
            parsed.total_articles,
            country_code
        );

        let articles = parsed
            .articles
            .into_iter()
            .filter_map(|raw| {
                let article = raw.into_article();
                if article.is_none() {
                    log::warn!("Skipping article without title or url");
                }
                article
            })
            .collect();

        Ok(articles)
    }
}

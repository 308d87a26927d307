//! Prediction handlers

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use stability_core::{assess, Article, PredictionResult};

use crate::models::{LiveQuery, PredictRequest};
use crate::{AppResult, AppState};

/// Predict from live headlines
pub async fn predict_live(
    State(state): State<AppState>,
    Query(query): Query<LiveQuery>,
) -> AppResult<Json<Vec<PredictionResult>>> {
    // An explicit empty value is forwarded as-is
    let country = query
        .country
        .unwrap_or_else(|| state.config.default_country.clone());

    let articles = state.news.fetch(&country, state.config.news_max_articles).await;
    if articles.is_empty() {
        tracing::info!("No articles for country '{}'", country);
        return Ok(Json(Vec::new()));
    }

    let results = run_assessment(&state, articles).await?;
    Ok(Json(results))
}

/// Predict from caller-supplied headlines
pub async fn predict_from_input(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> AppResult<Json<Vec<PredictionResult>>> {
    let Json(request) = payload?;

    let articles: Vec<Article> = request
        .news
        .unwrap_or_default()
        .into_iter()
        .map(Article::from)
        .collect();

    if articles.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let results = run_assessment(&state, articles).await?;
    Ok(Json(results))
}

/// Inference is CPU-bound: keep it off the async workers
async fn run_assessment(state: &AppState, articles: Vec<Article>) -> AppResult<Vec<PredictionResult>> {
    let classifier = state.classifier.clone();
    let results = tokio::task::spawn_blocking(move || assess(classifier.as_ref(), &articles)).await??;
    Ok(results)
}

//! Stability Predictor
//!
//! CHỈ chứa logic classify từng article - explanation được gắn ở pipeline.

use crate::logic::model::{argmax, predict_text, Classifier, InferenceError};
use crate::logic::news::Article;

use super::types::{Prediction, PredictionResult};

/// Model input for an article. The trailing space is kept when
/// the description is empty.
pub fn build_text(article: &Article) -> String {
    format!("{} {}", article.title, article.description)
}

/// Classify each article on its own, in input order.
pub fn predict(
    classifier: &dyn Classifier,
    articles: &[Article],
) -> Result<Vec<PredictionResult>, InferenceError> {
    let mut results = Vec::with_capacity(articles.len());

    for article in articles {
        let text = build_text(article);
        let probs = predict_text(classifier, &text)?;
        let pred_class = argmax(&probs).ok_or(InferenceError::EmptyOutput)?;

        results.push(PredictionResult {
            text,
            prediction: Prediction::from_class(pred_class),
            confidence: probs[pred_class],
            url: article.url.clone(),
            explanation: Vec::new(),
        });
    }

    Ok(results)
}

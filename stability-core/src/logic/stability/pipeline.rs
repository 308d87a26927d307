//! Pipeline - Predictor + Explainer
//!
//! Một article lỗi explanation không làm hỏng cả batch.

use std::panic::{self, AssertUnwindSafe};

use crate::constants::EXPLANATION_ERROR;
use crate::logic::explain::{explain, TokenImportance};
use crate::logic::model::{Classifier, InferenceError};
use crate::logic::news::Article;

use super::predictor::predict;
use super::types::PredictionResult;

/// Predict every article, then attach an explanation to each result.
///
/// Model failures during prediction propagate. Explanation failures never do:
/// an explainer error yields the "No explanation available" placeholder and a
/// panic inside the model stack yields "Error generating explanation".
pub fn assess(
    classifier: &dyn Classifier,
    articles: &[Article],
) -> Result<Vec<PredictionResult>, InferenceError> {
    if articles.is_empty() {
        return Ok(Vec::new());
    }

    let mut results = predict(classifier, articles)?;

    for result in &mut results {
        result.explanation = explain_guarded(classifier, &result.text);
    }

    log::info!("Assessed {} articles", results.len());

    Ok(results)
}

fn explain_guarded(classifier: &dyn Classifier, text: &str) -> Vec<TokenImportance> {
    match panic::catch_unwind(AssertUnwindSafe(|| explain(classifier, text))) {
        Ok(explanation) => explanation,
        Err(_) => {
            log::error!("Error explaining prediction: explainer aborted");
            TokenImportance::placeholder(EXPLANATION_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NO_EXPLANATION;
    use crate::logic::model::{EngineStatus, TokenizedText};
    use crate::logic::stability::Prediction;
    use crate::testing::{FakeClassifier, MASK_ID};

    fn article(title: &str, description: &str) -> Article {
        Article {
            title: title.to_string(),
            description: description.to_string(),
            content: String::new(),
            url: format!("https://news.example/{}", title.replace(' ', "-")),
        }
    }

    /// Panics on masked passes over texts containing "kaboom"
    struct PanickyClassifier(FakeClassifier);

    impl Classifier for PanickyClassifier {
        fn tokenize(&self, text: &str) -> Result<TokenizedText, InferenceError> {
            self.0.tokenize(text)
        }

        fn mask_token_id(&self) -> i64 {
            self.0.mask_token_id()
        }

        fn logits(&self, batch: &[TokenizedText]) -> Result<Vec<Vec<f32>>, InferenceError> {
            for row in batch {
                if row.ids.contains(&MASK_ID) && row.tokens.iter().any(|t| t == "kaboom") {
                    panic!("runtime crashed");
                }
            }
            self.0.logits(batch)
        }

        fn status(&self) -> EngineStatus {
            self.0.status()
        }
    }

    #[test]
    fn test_empty_input_skips_model() {
        let classifier = FakeClassifier::new();
        assert!(assess(&classifier, &[]).unwrap().is_empty());
        assert_eq!(classifier.forward_calls(), 0);
    }

    #[test]
    fn test_results_carry_explanations() {
        let classifier = FakeClassifier::new();
        let results = assess(&classifier, &[article("Sanctions tighten", "Talks stall")]).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text, "Sanctions tighten Talks stall");
        assert_eq!(results[0].prediction, Prediction::AtRisk);
        assert_eq!(results[0].explanation[0], TokenImportance::new("sanctions", 2.0));
    }

    #[test]
    fn test_one_failing_explanation_among_three() {
        let classifier = FakeClassifier::new().with_poison_word("glitch");
        let articles = vec![
            article("War fears grow", "Border tense"),
            article("Glitch hits exchange", "Trading halted"),
            article("Festival opens", ""),
        ];

        let results = assess(&classifier, &articles).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[1].explanation, vec![TokenImportance::new(NO_EXPLANATION, 0.0)]);
        assert_ne!(results[0].explanation[0].token, NO_EXPLANATION);
        assert_ne!(results[2].explanation[0].token, NO_EXPLANATION);
        assert_eq!(results[2].text, "Festival opens ");
    }

    #[test]
    fn test_explainer_panic_is_contained() {
        let classifier = PanickyClassifier(FakeClassifier::new());
        let articles = vec![article("Kaboom at depot", "Blast"), article("Quiet day", "")];

        let results = assess(&classifier, &articles).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].explanation, vec![TokenImportance::new(EXPLANATION_ERROR, 0.0)]);
        assert_eq!(results[1].explanation.len(), 2);
    }
}

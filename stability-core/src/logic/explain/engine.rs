use super::types::TokenImportance;
use crate::constants::{EXPLANATION_TOP_K, NO_EXPLANATION};
use crate::logic::model::{argmax, Classifier, InferenceError};

/// Top tokens by leave-one-out masking. Never fails: errors become a placeholder.
pub fn explain(classifier: &dyn Classifier, text: &str) -> Vec<TokenImportance> {
    match try_explain(classifier, text) {
        Ok(importances) => importances,
        Err(e) => {
            log::error!("Error in explanation: {}", e);
            TokenImportance::placeholder(NO_EXPLANATION)
        }
    }
}

/// Mask each non-boundary token in turn and measure the drop in the
/// predicted class logit. One forward pass per token.
pub fn try_explain(
    classifier: &dyn Classifier,
    text: &str,
) -> Result<Vec<TokenImportance>, InferenceError> {
    let encoded = classifier.tokenize(text)?;

    let baseline_logits = single_row(classifier.logits(std::slice::from_ref(&encoded))?)?;
    let pred_class = argmax(&baseline_logits).ok_or(InferenceError::EmptyOutput)?;
    let baseline = baseline_logits[pred_class];

    let mask_id = classifier.mask_token_id();
    let mut importances = Vec::with_capacity(encoded.len().saturating_sub(2));

    // Skip [CLS] and [SEP]
    for position in 1..encoded.len().saturating_sub(1) {
        let masked = encoded.masked_at(position, mask_id);
        let masked_logits = single_row(classifier.logits(std::slice::from_ref(&masked))?)?;

        let masked_score = masked_logits
            .get(pred_class)
            .copied()
            .ok_or(InferenceError::EmptyOutput)?;

        importances.push(TokenImportance::new(
            encoded.tokens[position].clone(),
            baseline - masked_score,
        ));
    }

    // Stable: equal magnitudes keep token order
    importances.sort_by(|a, b| b.importance.abs().total_cmp(&a.importance.abs()));
    importances.truncate(EXPLANATION_TOP_K);

    Ok(importances)
}

fn single_row(rows: Vec<Vec<f32>>) -> Result<Vec<f32>, InferenceError> {
    rows.into_iter()
        .next()
        .filter(|row| !row.is_empty())
        .ok_or(InferenceError::EmptyOutput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeClassifier;

    #[test]
    fn test_risk_word_ranks_first() {
        let classifier = FakeClassifier::new();
        let explanation = explain(&classifier, "war erupts near border");

        assert_eq!(explanation[0], TokenImportance::new("war", 2.0));
        assert!(explanation[1..].iter().all(|t| t.importance == 0.0));
    }

    #[test]
    fn test_short_text_explains_every_token() {
        let classifier = FakeClassifier::new();
        let explanation = explain(&classifier, "calm talks resume");

        assert_eq!(explanation.len(), 3);
        // All zero: ties keep original order
        let tokens: Vec<_> = explanation.iter().map(|t| t.token.as_str()).collect();
        assert_eq!(tokens, vec!["calm", "talks", "resume"]);
    }

    #[test]
    fn test_capped_at_five_and_sorted() {
        let classifier = FakeClassifier::new();
        let explanation = explain(
            &classifier,
            "leaders meet as war and crisis and sanctions and riots spread",
        );

        assert_eq!(explanation.len(), EXPLANATION_TOP_K);
        for pair in explanation.windows(2) {
            assert!(pair[0].importance.abs() >= pair[1].importance.abs());
        }
        let tokens: Vec<_> = explanation[..4].iter().map(|t| t.token.as_str()).collect();
        assert_eq!(tokens, vec!["war", "crisis", "sanctions", "riots"]);
    }

    #[test]
    fn test_one_pass_per_token_plus_baseline() {
        let classifier = FakeClassifier::new();
        explain(&classifier, "one two three four");
        assert_eq!(classifier.forward_calls(), 5);
    }

    #[test]
    fn test_sort_tolerates_nan() {
        struct NanClassifier(FakeClassifier);

        impl Classifier for NanClassifier {
            fn tokenize(&self, text: &str) -> Result<crate::logic::model::TokenizedText, InferenceError> {
                self.0.tokenize(text)
            }
            fn mask_token_id(&self) -> i64 {
                self.0.mask_token_id()
            }
            fn logits(&self, batch: &[crate::logic::model::TokenizedText]) -> Result<Vec<Vec<f32>>, InferenceError> {
                let mut rows = self.0.logits(batch)?;
                for (row, input) in rows.iter_mut().zip(batch) {
                    // Masking the second word poisons the score
                    if input.ids.get(2) == Some(&self.0.mask_token_id()) {
                        row[1] = f32::NAN;
                    }
                }
                Ok(rows)
            }
            fn status(&self) -> crate::logic::model::EngineStatus {
                self.0.status()
            }
        }

        let explanation = explain(&NanClassifier(FakeClassifier::new()), "war erupts today");

        assert_eq!(explanation.len(), 3);
        // NaN magnitude orders above every finite value under total_cmp
        assert!(explanation[0].importance.is_nan());
        assert_eq!(explanation[0].token, "erupts");
        assert_eq!(explanation[1], TokenImportance::new("war", 2.0));
        assert_eq!(explanation[2], TokenImportance::new("today", 0.0));
    }

    #[test]
    fn test_idempotent() {
        let classifier = FakeClassifier::new();
        let text = "coup attempt sparks riots in capital";
        assert_eq!(explain(&classifier, text), explain(&classifier, text));
    }

    #[test]
    fn test_empty_text_has_no_tokens() {
        let classifier = FakeClassifier::new();
        assert!(explain(&classifier, "").is_empty());
    }

    #[test]
    fn test_failure_yields_placeholder() {
        let classifier = FakeClassifier::new().with_poison_word("glitch");

        assert!(try_explain(&classifier, "glitch in the grid").is_err());
        assert_eq!(
            explain(&classifier, "glitch in the grid"),
            vec![TokenImportance::new(NO_EXPLANATION, 0.0)]
        );
    }
}

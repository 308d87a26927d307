use serde::{Deserialize, Serialize};

/// Token with its signed contribution to the predicted class.
///
/// Serialized as a `[token, importance]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f32)", into = "(String, f32)")]
pub struct TokenImportance {
    pub token: String,
    /// Baseline logit minus masked logit of the predicted class
    pub importance: f32,
}

impl TokenImportance {
    pub fn new(token: impl Into<String>, importance: f32) -> Self {
        Self { token: token.into(), importance }
    }

    /// Single-entry explanation used when attribution could not be computed
    pub fn placeholder(reason: &str) -> Vec<Self> {
        vec![Self::new(reason, 0.0)]
    }
}

impl From<(String, f32)> for TokenImportance {
    fn from((token, importance): (String, f32)) -> Self {
        Self { token, importance }
    }
}

impl From<TokenImportance> for (String, f32) {
    fn from(t: TokenImportance) -> Self {
        (t.token, t.importance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_pair() {
        let json = serde_json::to_string(&TokenImportance::new("war", 1.5)).unwrap();
        assert_eq!(json, r#"["war",1.5]"#);

        let back: TokenImportance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TokenImportance::new("war", 1.5));
    }
}

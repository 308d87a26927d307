//! Central Configuration Constants
//!
//! Single source of truth for all defaults used by the inference core.

/// Default directory holding `model.onnx` and `tokenizer.json`
pub const DEFAULT_MODEL_DIR: &str = "geopolitical_bert";

/// ONNX graph file inside the model directory
pub const MODEL_FILE_NAME: &str = "model.onnx";

/// Tokenizer file inside the model directory
pub const TOKENIZER_FILE_NAME: &str = "tokenizer.json";

/// Upper bound on tokens per input (also bounds explanation cost)
pub const MAX_SEQUENCE_LENGTH: usize = 512;

pub const MASK_TOKEN: &str = "[MASK]";
pub const PAD_TOKEN: &str = "[PAD]";

/// Class index the model uses for "At Risk"
pub const AT_RISK_CLASS: usize = 1;

pub const LABEL_AT_RISK: &str = "At Risk";
pub const LABEL_SAFE: &str = "Safe";

/// Number of tokens kept in an explanation
pub const EXPLANATION_TOP_K: usize = 5;

/// Placeholder when the explainer returns an error
pub const NO_EXPLANATION: &str = "No explanation available";

/// Placeholder when explaining an article aborts unexpectedly
pub const EXPLANATION_ERROR: &str = "Error generating explanation";

/// Default news provider (GNews v4)
pub const DEFAULT_NEWS_API_URL: &str = "https://gnews.io/api/v4";

pub const DEFAULT_COUNTRY: &str = "in";

pub const DEFAULT_MAX_ARTICLES: u32 = 10;

/// Request timeout for the news provider (seconds)
pub const DEFAULT_NEWS_TIMEOUT_SECS: u64 = 10;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

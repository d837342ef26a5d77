use serde::{Deserialize, Serialize};

/// Raw completion returned by an LLM provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
    pub cached: bool,
    pub meta: serde_json::Value,
}

/// One comparison request: the raw prompt plus an optional user reference
/// under which the result is recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub prompt: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl CompareRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// A prompt, the assistant response it produced, and the quality score of
/// the pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredExchange {
    pub prompt: String,
    pub response: String,
    pub score: f64,
}

/// Result of scoring an original prompt against its optimized rewrite.
///
/// Serializes to the wire shape
/// `{ original: { prompt, response, score }, optimized: { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub original: ScoredExchange,
    pub optimized: ScoredExchange,
}

/// Per-user aggregates over recorded comparisons, exchanges, and sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub user_id: String,
    pub comparisons: i64,
    pub avg_original_score: Option<f64>,
    pub avg_optimized_score: Option<f64>,
    pub chats: i64,
    pub avg_chat_score: Option<f64>,
    pub total_session_secs: i64,
}

use std::time::Duration;

/// Generation settings handed to the provider clients at construction.
///
/// Built once at process start (explicitly or via [`EngineConfig::from_env`])
/// and passed by injection; the core never consults the environment after
/// that.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub optimizer_model: String,
    pub temperature: f32,
    pub max_tokens_chat: u32,
    pub max_tokens_optimize: u32,
    pub request_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-4".to_string(),
            optimizer_model: "gpt-4".to_string(),
            temperature: 0.7,
            max_tokens_chat: 500,
            max_tokens_optimize: 300,
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl EngineConfig {
    /// Read the environment once at startup.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            cfg.api_key = key;
        }
        if let Ok(url) = std::env::var("TRIAGE_BASE_URL") {
            cfg.base_url = url;
        }
        if let Ok(model) = std::env::var("TRIAGE_MODEL") {
            cfg.chat_model = model.clone();
            cfg.optimizer_model = model;
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_production_service() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.chat_model, "gpt-4");
        assert_eq!(cfg.max_tokens_chat, 500);
        assert_eq!(cfg.max_tokens_optimize, 300);
        assert!((cfg.temperature - 0.7).abs() < f32::EPSILON);
    }
}

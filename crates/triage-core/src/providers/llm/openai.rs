use super::LlmClient;
use crate::config::EngineConfig;
use crate::model::LlmResponse;
use async_trait::async_trait;
use serde_json::json;

pub struct OpenAiClient {
    pub model: String,
    pub api_key: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(model: String, api_key: String, temperature: f32, max_tokens: u32) -> Self {
        Self {
            model,
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
            temperature,
            max_tokens,
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from an [`EngineConfig`], with the config's base URL
    /// and request timeout applied.
    pub fn from_config(cfg: &EngineConfig, model: String, max_tokens: u32) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(cfg.request_timeout)
            .build()?;
        Ok(Self {
            model,
            api_key: cfg.api_key.clone(),
            base_url: cfg.base_url.clone(),
            temperature: cfg.temperature,
            max_tokens,
            client,
        })
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(
        &self,
        prompt: &str,
        system: Option<&[String]>,
    ) -> anyhow::Result<LlmResponse> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let mut messages = Vec::new();
        if let Some(system) = system {
            for content in system {
                messages.push(json!({
                    "role": "system",
                    "content": content
                }));
            }
        }
        messages.push(json!({
            "role": "user",
            "content": prompt
        }));

        let body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_else(|_| String::new());
            anyhow::bail!("OpenAI chat API error (status {}): {}", status, error_text);
        }

        let json: serde_json::Value = resp.json().await?;

        // Parse choices[0].message.content
        let text = json
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("OpenAI API response missing content"))?
            .to_string();

        Ok(LlmResponse {
            text,
            provider: "openai".to_string(),
            model: self.model.clone(),
            cached: false,
            meta: json!({}),
        })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_carries_generation_settings() {
        let cfg = EngineConfig {
            api_key: "test-key".to_string(),
            base_url: "http://localhost:9999/v1".to_string(),
            ..EngineConfig::default()
        };
        let client = OpenAiClient::from_config(&cfg, "gpt-4".to_string(), 300).unwrap();
        assert_eq!(client.base_url, "http://localhost:9999/v1");
        assert_eq!(client.max_tokens, 300);
        assert_eq!(client.provider_name(), "openai");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_error() {
        let cfg = EngineConfig {
            api_key: "test-key".to_string(),
            // Nothing listens here; the request must fail, not hang.
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout: std::time::Duration::from_millis(500),
            ..EngineConfig::default()
        };
        let client = OpenAiClient::from_config(&cfg, "gpt-4".to_string(), 16).unwrap();
        let err = client.complete("hello", None).await;
        assert!(err.is_err());
    }
}

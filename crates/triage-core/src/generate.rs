use std::sync::Arc;

use crate::errors::{Error, Stage};
use crate::providers::llm::LlmClient;

pub(crate) const OPTIMIZER_SYSTEM_PROMPT: &str = "You are a prompt optimization expert. \
     Rewrite the given medical prompt to be more specific, clear, and effective. \
     Focus on adding context, specificity, and proper framing. \
     Return ONLY the optimized prompt, nothing else.";

pub(crate) const ASSISTANT_SYSTEM_PROMPT: &str = "You are a helpful medical assistant \
     providing information about diagnoses and medical conditions.";

/// Rewrites a raw prompt into a more specific one via the configured provider.
pub struct PromptOptimizer {
    client: Arc<dyn LlmClient>,
}

impl PromptOptimizer {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Must return non-empty text on success; a blank completion is an
    /// upstream failure.
    pub async fn rewrite(&self, prompt: &str) -> Result<String, Error> {
        let system = vec![OPTIMIZER_SYSTEM_PROMPT.to_string()];
        let user = format!("Original prompt: \"{}\"", prompt);
        let resp = self
            .client
            .complete(&user, Some(&system))
            .await
            .map_err(|e| Error::upstream(Stage::Optimize, e))?;
        let text = resp.text.trim().to_string();
        if text.is_empty() {
            return Err(Error::upstream(
                Stage::Optimize,
                anyhow::anyhow!("empty completion from provider '{}'", resp.provider),
            ));
        }
        Ok(text)
    }
}

/// Produces an assistant response for a prompt.
pub struct ResponseGenerator {
    client: Arc<dyn LlmClient>,
}

impl ResponseGenerator {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub async fn respond(&self, prompt: &str) -> Result<String, Error> {
        let system = vec![ASSISTANT_SYSTEM_PROMPT.to_string()];
        let resp = self
            .client
            .complete(prompt, Some(&system))
            .await
            .map_err(|e| Error::upstream(Stage::Respond, e))?;
        let text = resp.text.trim().to_string();
        if text.is_empty() {
            return Err(Error::upstream(
                Stage::Respond,
                anyhow::anyhow!("empty completion from provider '{}'", resp.provider),
            ));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::llm::FakeClient;

    #[tokio::test]
    async fn rewrite_trims_surrounding_whitespace() -> anyhow::Result<()> {
        let client = Arc::new(
            FakeClient::new("fake".to_string()).with_response("  optimized prompt \n".to_string()),
        );
        let optimizer = PromptOptimizer::new(client);
        let out = optimizer.rewrite("fever?").await?;
        assert_eq!(out, "optimized prompt");
        Ok(())
    }

    #[tokio::test]
    async fn blank_completion_is_an_upstream_error() {
        let client = Arc::new(FakeClient::new("fake".to_string()).with_response("   ".to_string()));
        let generator = ResponseGenerator::new(client);
        let err = generator.respond("fever?").await.unwrap_err();
        match err {
            Error::Upstream { stage, .. } => assert_eq!(stage, Stage::Respond),
            other => panic!("expected upstream error, got {other}"),
        }
    }
}

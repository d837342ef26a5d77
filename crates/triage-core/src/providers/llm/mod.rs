pub mod fake;
pub mod openai;

pub use fake::FakeClient;
pub use openai::OpenAiClient;

use crate::model::LlmResponse;
use async_trait::async_trait;

/// A chat-completion provider.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Complete `prompt`, optionally prefixed by system messages.
    async fn complete(
        &self,
        prompt: &str,
        system: Option<&[String]>,
    ) -> anyhow::Result<LlmResponse>;

    fn provider_name(&self) -> &'static str;
}

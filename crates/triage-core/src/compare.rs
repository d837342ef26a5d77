use std::sync::Arc;

use crate::errors::{Error, Result};
use crate::generate::{PromptOptimizer, ResponseGenerator};
use crate::model::{CompareRequest, Comparison, ScoredExchange};
use crate::scoring::Scorer;
use crate::storage::ComparisonSink;

/// Sequences one comparison: optimize the prompt, fetch both responses,
/// score both pairs, optionally persist.
pub struct Comparator {
    optimizer: PromptOptimizer,
    generator: ResponseGenerator,
    scorer: Arc<dyn Scorer>,
    sink: Option<Arc<dyn ComparisonSink>>,
}

impl Comparator {
    pub fn new(
        optimizer: PromptOptimizer,
        generator: ResponseGenerator,
        scorer: Arc<dyn Scorer>,
    ) -> Self {
        Self {
            optimizer,
            generator,
            scorer,
            sink: None,
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn ComparisonSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Runs the full original-vs-optimized comparison for one request.
    ///
    /// Any provider failure fails the whole comparison; no partial result is
    /// returned and nothing is persisted. A sink failure after a successful
    /// comparison is logged and does not affect the returned result.
    pub async fn compare(&self, request: &CompareRequest) -> Result<Comparison> {
        let prompt = request.prompt.trim();
        if prompt.is_empty() {
            return Err(Error::validation("Prompt is required"));
        }

        let optimized_prompt = self.optimizer.rewrite(prompt).await?;

        // Independent fetches; both must complete before scoring.
        let (original_response, optimized_response) = tokio::try_join!(
            self.generator.respond(prompt),
            self.generator.respond(&optimized_prompt),
        )?;

        let original = ScoredExchange {
            score: self.scorer.score(prompt, &original_response),
            prompt: prompt.to_string(),
            response: original_response,
        };
        let optimized = ScoredExchange {
            score: self.scorer.score(&optimized_prompt, &optimized_response),
            prompt: optimized_prompt,
            response: optimized_response,
        };
        let comparison = Comparison {
            original,
            optimized,
        };

        if let Some(sink) = &self.sink {
            if let Err(e) = sink.record_comparison(request.user_id.as_deref(), &comparison) {
                tracing::warn!(user = ?request.user_id, error = %e, "failed to persist comparison");
            }
        }

        Ok(comparison)
    }

    /// Scores a single assistant exchange without optimizing the prompt.
    pub async fn chat(&self, request: &CompareRequest) -> Result<ScoredExchange> {
        let prompt = request.prompt.trim();
        if prompt.is_empty() {
            return Err(Error::validation("Prompt is required"));
        }

        let response = self.generator.respond(prompt).await?;
        let exchange = ScoredExchange {
            score: self.scorer.score(prompt, &response),
            prompt: prompt.to_string(),
            response,
        };

        if let Some(sink) = &self.sink {
            if let Err(e) = sink.record_exchange(request.user_id.as_deref(), &exchange) {
                tracing::warn!(user = ?request.user_id, error = %e, "failed to persist exchange");
            }
        }

        Ok(exchange)
    }
}

mod schema;
mod store;

pub use store::Store;

use crate::model::{Comparison, ScoredExchange};

/// Best-effort durable record of scoring activity, keyed by user.
///
/// Implementations report failures to the caller; the orchestrator treats
/// them as non-fatal once a comparison has succeeded.
pub trait ComparisonSink: Send + Sync {
    fn record_comparison(
        &self,
        user_id: Option<&str>,
        comparison: &Comparison,
    ) -> anyhow::Result<()>;

    fn record_exchange(
        &self,
        user_id: Option<&str>,
        exchange: &ScoredExchange,
    ) -> anyhow::Result<()>;

    /// Session telemetry. `seconds` must be non-negative; a negative value
    /// is rejected without writing anything.
    fn record_session(&self, user_id: &str, seconds: i64) -> anyhow::Result<()>;
}

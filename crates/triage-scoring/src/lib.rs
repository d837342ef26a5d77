use std::sync::Arc;

use triage_core::scoring::Scorer;

mod keyword;
mod lexical;

pub use keyword::KeywordHeuristic;
pub use lexical::LexicalProfile;

/// The policy production traffic scores with.
pub fn default_scorer() -> Arc<dyn Scorer> {
    Arc::new(KeywordHeuristic)
}

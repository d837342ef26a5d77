use std::fmt;

use thiserror::Error;

/// Pipeline stage a generation collaborator failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Optimize,
    Respond,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Optimize => write!(f, "prompt optimization"),
            Stage::Respond => write!(f, "response generation"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Request rejected before any provider call was made.
    #[error("{0}")]
    Validation(String),

    /// A generation collaborator failed. Terminal for the whole comparison:
    /// no partial result is produced and nothing is persisted.
    #[error("{stage} failed: {source}")]
    Upstream {
        stage: Stage,
        #[source]
        source: anyhow::Error,
    },

    /// A durable write failed. Surfaced through logs only once a comparison
    /// has succeeded, never through the comparison result itself.
    #[error("persistence failed: {0}")]
    Persistence(String),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    pub fn upstream(stage: Stage, source: anyhow::Error) -> Self {
        Error::Upstream { stage, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

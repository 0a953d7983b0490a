use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to read request log: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error("invalid request record on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("request store unavailable: {reason}")]
    Unavailable { reason: String },
}

impl QueryError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

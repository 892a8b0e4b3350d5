use thiserror::Error;

/// Failure to obtain or decode one of the input record lists.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input '{origin}' is unavailable: {cause}")]
    Unavailable {
        origin: String,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("input '{origin}' is not a valid record list: {error}")]
    Malformed {
        origin: String,
        #[source]
        error: serde_json::Error,
    },
}

impl LoadError {
    pub fn unavailable(
        origin: impl Into<String>,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Unavailable {
            origin: origin.into(),
            cause: cause.into(),
        }
    }

    pub fn malformed(origin: impl Into<String>, error: serde_json::Error) -> Self {
        Self::Malformed {
            origin: origin.into(),
            error,
        }
    }
}

use thiserror::Error;

/// Everything that can go wrong between issuing a backend request and holding
/// a canonical entity. All variants end up as a `FetchResult::Failure`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("{0} not found")]
    Missing(&'static str),

    #[error("Unexpected {resource} payload: {reason}")]
    Malformed {
        resource: &'static str,
        reason: String,
    },
}

impl FetchError {
    pub fn malformed(resource: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            resource,
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status(status.as_u16()),
            None if err.is_decode() => Self::Malformed {
                resource: "response",
                reason: err.to_string(),
            },
            None => Self::Transport(err.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// State of one asynchronous read. Exactly one variant is active; a fetch
/// moves Pending to Success or Failure and never between terminal states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult<T> {
    Pending,
    Success(T),
    Failure(String),
}

impl<T> FetchResult<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> FetchResult<&T> {
        match self {
            Self::Pending => FetchResult::Pending,
            Self::Success(data) => FetchResult::Success(data),
            Self::Failure(message) => FetchResult::Failure(message.clone()),
        }
    }

    pub fn map<U, F>(self, f: F) -> FetchResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Pending => FetchResult::Pending,
            Self::Success(data) => FetchResult::Success(f(data)),
            Self::Failure(message) => FetchResult::Failure(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for FetchResult<T> {
    fn from(outcome: Result<T, E>) -> Self {
        match outcome {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Failure(err.to_string()),
        }
    }
}

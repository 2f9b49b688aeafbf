use std::time::Duration;

use crate::{Article, ErrorKind, FetchFailure};

/// What the rendering layer should show for the current query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    /// Nothing requested yet, e.g. a blank term was suppressed.
    Idle,
    Loading {
        term: String,
    },
    Error {
        kind: ErrorKind,
        message: String,
        /// Short text suitable for the error banner.
        display_message: String,
        retryable: bool,
    },
    Empty {
        term: String,
    },
    Success {
        articles: Vec<Article>,
    },
}

impl ViewStatus {
    pub(crate) fn error(failure: &FetchFailure) -> Self {
        let display_message = match failure.kind {
            ErrorKind::NonJsonResponse => "Server returned invalid response".to_string(),
            _ => failure.message.clone(),
        };
        ViewStatus::Error {
            kind: failure.kind,
            message: failure.message.clone(),
            display_message,
            retryable: failure.kind.is_retryable(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub name: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub term: String,
    pub status: ViewStatus,
    pub loading: bool,
    pub categories: Vec<CategoryView>,
    pub refresh_period: Duration,
    pub dirty: bool,
}
